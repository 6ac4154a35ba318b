use crate::error::{NotelistError, Result};
use rowkit::{LabelHandle, RowId, RowView};

/// Slot ids every note row template must declare.
pub mod slots {
    pub const NOTE_ID: &str = "note_id";
    pub const NOTE_CONTENT: &str = "note_content";
    pub const NOTE_DATE: &str = "note_date";
}

/// Resolved label handles of one physical row.
///
/// Built once when the row is inflated, then stored as the row's tag so later
/// renders of the same row skip the slot lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCache {
    row: RowId,
    pub id: LabelHandle,
    pub content: LabelHandle,
    pub date: LabelHandle,
}

impl RowCache {
    /// Resolves the three note slots of `row`. A missing slot means the row
    /// template does not match this adapter.
    pub fn resolve<T>(row: &RowView<T>) -> Result<Self> {
        let find = |slot: &str| {
            row.find_label(slot).ok_or_else(|| NotelistError::MissingSlot {
                template: row.template().to_string(),
                slot: slot.to_string(),
            })
        };
        Ok(Self {
            row: row.id(),
            id: find(slots::NOTE_ID)?,
            content: find(slots::NOTE_CONTENT)?,
            date: find(slots::NOTE_DATE)?,
        })
    }

    /// The row this cache was resolved against.
    pub fn row(&self) -> RowId {
        self.row
    }
}
