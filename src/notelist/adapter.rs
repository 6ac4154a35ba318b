//! # Notes Adapter
//!
//! Binds the ordered note list to row views. The host asks for a row at a
//! position, optionally handing back a row it rendered earlier; the adapter
//! reuses that row (and the [`RowCache`] tagged onto it) or inflates a new
//! one, then overwrites every field from the note at that position.
//!
//! Identity is positional: `stable_id(p) == p`. Rows are never reordered
//! mid-session, so the host does not need anything stronger.

use crate::date_format::DateTimeFormatter;
use crate::error::{NotelistError, Result};
use crate::highlight::highlight_hashtags;
use crate::model::NoteRowState;
use crate::row_cache::{slots, RowCache};
use log::{debug, trace};
use rowkit::{names, Inflater, RowTemplate, RowView};

/// Name of the stock note row template.
pub const NOTES_ROW: &str = "notes_row";

/// A row view tagged with its resolved note slots.
pub type NoteRow = RowView<RowCache>;

/// The stock note row: id, content and date on one line.
pub fn notes_row_template() -> RowTemplate {
    RowTemplate::new(
        NOTES_ROW,
        r#"{{ note_id | style("note_id") }}  {{ note_content }}  {{ note_date | style("note_date") }}"#,
        &[slots::NOTE_ID, slots::NOTE_CONTENT, slots::NOTE_DATE],
    )
}

pub struct NotesAdapter {
    data: Vec<NoteRowState>,
    formatter: DateTimeFormatter,
    row_template: String,
}

impl NotesAdapter {
    pub fn new(data: Vec<NoteRowState>) -> Self {
        Self {
            data,
            formatter: DateTimeFormatter::default(),
            row_template: NOTES_ROW.to_string(),
        }
    }

    pub fn with_formatter(mut self, formatter: DateTimeFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Uses another registered template for rows. It must declare the three
    /// note slots.
    pub fn with_row_template(mut self, name: &str) -> Self {
        self.row_template = name.to_string();
        self
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn items(&self) -> &[NoteRowState] {
        &self.data
    }

    pub fn item_at(&self, position: usize) -> Result<&NoteRowState> {
        let count = self.count();
        self.data
            .get(position)
            .ok_or(NotelistError::PositionOutOfRange { position, count })
    }

    pub fn item_at_mut(&mut self, position: usize) -> Result<&mut NoteRowState> {
        let count = self.count();
        self.data
            .get_mut(position)
            .ok_or(NotelistError::PositionOutOfRange { position, count })
    }

    pub fn stable_id(&self, position: usize) -> u64 {
        position as u64
    }

    /// Sets the selection flag of the item at `position`. Only the host calls
    /// this; the adapter never changes selection on its own.
    pub fn set_selected(&mut self, position: usize, is_selected: bool) -> Result<()> {
        self.item_at_mut(position)?.set_selected(is_selected);
        Ok(())
    }

    /// Swaps in a new note list. Rows on screen must be re-rendered by the host.
    pub fn replace_all(&mut self, data: Vec<NoteRowState>) {
        debug!(
            "event=data_replaced module=adapter old_count={} new_count={}",
            self.data.len(),
            data.len()
        );
        self.data = data;
    }

    /// Template used for every position; rows are only interchangeable
    /// within the same template.
    pub fn view_type(&self, _position: usize) -> &str {
        &self.row_template
    }

    /// Populates a row for `position`.
    ///
    /// `existing` is reused when it was built from this adapter's template;
    /// otherwise a new row is inflated from `parent` and tagged with its
    /// [`RowCache`]. Every field is overwritten, so no state from a previous
    /// position survives. On error the supplied row is dropped; hosts that
    /// want to keep it use [`bind_row`](Self::bind_row).
    pub fn render_row(
        &self,
        position: usize,
        existing: Option<NoteRow>,
        parent: &Inflater,
    ) -> Result<NoteRow> {
        self.item_at(position)?;
        let mut row = match existing.filter(|row| row.template() == self.row_template) {
            Some(row) => row,
            None => self.inflate_row(parent)?,
        };
        self.bind_row(position, &mut row, parent)?;
        Ok(row)
    }

    /// Overwrites `row` in place with the note at `position`.
    ///
    /// Everything fallible is resolved before the row is touched, so on error
    /// the row still shows whatever it showed before.
    pub fn bind_row(&self, position: usize, row: &mut NoteRow, parent: &Inflater) -> Result<()> {
        let state = self.item_at(position)?;
        let note = state.note();

        let hashtag = parent.color(names::HASHTAG)?;
        let background = if state.is_selected() {
            parent.color(names::SELECTED_NOTE)?
        } else {
            parent.color(names::TRANSPARENT)?
        };
        let cache = match row.tag().copied() {
            Some(cache) => cache,
            None => {
                let cache = RowCache::resolve(row)?;
                row.set_tag(cache);
                cache
            }
        };

        trace!(
            "event=row_bind module=adapter position={} row={:?} selected={}",
            position,
            row.id(),
            state.is_selected()
        );
        row.set_text(cache.id, note.id.to_string());
        row.set_text(cache.content, highlight_hashtags(&note.content, hashtag));
        row.set_text(cache.date, self.formatter.format(note.updated_at));
        row.set_background(background);
        Ok(())
    }

    fn inflate_row(&self, parent: &Inflater) -> Result<NoteRow> {
        let mut row: NoteRow = parent.inflate(&self.row_template)?;
        let cache = RowCache::resolve(&row)?;
        row.set_tag(cache);
        debug!(
            "event=row_inflate module=adapter template={} row={:?}",
            self.row_template,
            row.id()
        );
        Ok(row)
    }
}
