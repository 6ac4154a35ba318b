//! # Notelist Architecture
//!
//! Notelist binds an ordered list of notes to recyclable terminal rows. It is
//! a library first; the `notelist` binary is a thin host used to preview
//! lists from a JSON feed.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (main.rs / NoteListView)                              │
//! │  - Owns the viewport and the recycle pool                   │
//! │  - Toggles selection, replaces data, triggers layout        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Adapter (adapter.rs)                                       │
//! │  - count / item_at / stable_id                              │
//! │  - render_row: reuse or inflate, then overwrite every field │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Row pieces                                                 │
//! │  - row_cache: resolved label handles, tagged onto the row   │
//! │  - highlight: hashtag spans                                 │
//! │  - date_format: medium date + medium time                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  rowkit (workspace crate)                                   │
//! │  - templates, row views, themes, styled text, recycle pool  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering Contract
//!
//! `render_row` writes the id, the highlighted content, the formatted date and
//! the background on every call. A row that last showed a selected note and is
//! reused for an unselected one ends up transparent again; nothing is diffed.
//!
//! ## Threading
//!
//! Everything runs on the caller's thread. No call blocks or does I/O apart
//! from the config and logging helpers, which the host uses at startup.
//!
//! ## Module Overview
//!
//! - [`adapter`]: the list adapter and the stock row template
//! - [`row_cache`]: per-row resolved slots
//! - [`highlight`]: hashtag detection
//! - [`date_format`]: locale-aware medium date/time
//! - [`list_view`]: scrolling viewport with row recycling
//! - [`model`]: `Note` and `NoteRowState`
//! - [`config`]: settings stored in `config.json`
//! - [`logging`]: stderr logger bootstrap
//! - [`error`]: error types

pub mod adapter;
pub mod config;
pub mod date_format;
pub mod error;
pub mod highlight;
pub mod list_view;
pub mod logging;
pub mod model;
pub mod row_cache;

pub use adapter::{notes_row_template, NoteRow, NotesAdapter, NOTES_ROW};
pub use config::NotelistConfig;
pub use date_format::{DateTimeFormatter, DisplayZone};
pub use error::{NotelistError, Result};
pub use highlight::{hashtags, highlight_hashtags};
pub use list_view::NoteListView;
pub use model::{Note, NoteRowState};
pub use row_cache::RowCache;
