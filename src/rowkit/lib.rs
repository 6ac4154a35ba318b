//! # Rowkit - Recyclable Terminal Rows
//!
//! A small view toolkit for drawing long lists in a terminal with constant
//! memory. It supplies the pieces a list adapter plugs into:
//!
//! - [`RowTemplate`]: a named minijinja template plus the slots it exposes
//! - [`Inflater`]: compiles templates and builds fresh [`RowView`]s from them
//! - [`RowView`]: a row container with labels, a background and a typed tag
//! - [`RecyclePool`]: detached rows kept for reuse, keyed by template
//! - [`Theme`] / [`AdaptiveTheme`]: colors looked up by symbolic name
//! - [`StyledText`]: plain text plus non-overlapping colored ranges
//!
//! ## Quick Example
//!
//! ```rust
//! use rowkit::{Inflater, RowTemplate, RowView, Theme};
//!
//! let mut inflater = Inflater::with_color(Theme::light(), false);
//! inflater
//!     .register(RowTemplate::new("row", "{{ name }}: {{ value }}", &["name", "value"]))
//!     .unwrap();
//!
//! let mut row: RowView<()> = inflater.inflate("row").unwrap();
//! let name = row.find_label("name").unwrap();
//! let value = row.find_label("value").unwrap();
//! row.set_text(name, "answer");
//! row.set_text(value, "42");
//! assert_eq!(row.render_line(&inflater, None).unwrap(), "answer: 42");
//! ```
//!
//! ## Template Syntax
//!
//! Templates use [minijinja](https://docs.rs/minijinja). Slots are plain
//! variables; the `style` filter paints a value with a theme color:
//!
//! ```jinja
//! {{ note_id | style("note_id") }}  {{ note_content }}
//! ```
//!
//! ## Terminal Detection
//!
//! [`Inflater::new`] asks the `console` crate whether stdout supports colors.
//! When it does not, rows render as plain text. Use [`Inflater::with_color`]
//! to force either behavior.

pub mod color;
pub mod error;
pub mod recycle;
pub mod styled;
pub mod template;
pub mod theme;
pub mod view;

pub use color::{rgb_to_ansi256, Color};
pub use error::{Result, RowError, ThemeError};
pub use recycle::{RecyclePool, DEFAULT_MAX_SCRAP};
pub use styled::{ColorSpan, StyledText};
pub use template::{Inflater, RowTemplate, MISSING_COLOR_INDICATOR};
pub use theme::{names, set_mode_detector, AdaptiveTheme, ColorMode, Theme, ThemeMode};
pub use view::{Label, LabelHandle, RowId, RowView};
