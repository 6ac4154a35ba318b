use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note as the host's data layer hands it over. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    #[serde(default)]
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(id: i64, content: impl Into<String>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            updated_at,
        }
    }
}

/// A note plus the selection flag the host toggles in response to input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRowState {
    note: Note,
    is_selected: bool,
}

impl NoteRowState {
    pub fn new(note: Note) -> Self {
        Self {
            note,
            is_selected: false,
        }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn set_selected(&mut self, is_selected: bool) {
        self.is_selected = is_selected;
    }
}

impl From<Note> for NoteRowState {
    fn from(note: Note) -> Self {
        NoteRowState::new(note)
    }
}
