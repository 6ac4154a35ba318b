use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown color resource: {0}")]
    UnknownColor(String),

    #[error("Unknown theme mode: {0} (expected auto|light|dark)")]
    UnknownMode(String),
}

#[derive(Error, Debug)]
pub enum RowError {
    #[error("Row template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template {template} declares slot {slot} more than once")]
    DuplicateSlot { template: String, slot: String },

    #[error("Span {start}..{end} is invalid for text of length {len}")]
    InvalidSpan { start: usize, end: usize, len: usize },

    #[error("Span {start}..{end} overlaps an existing span")]
    OverlappingSpan { start: usize, end: usize },

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

pub type Result<T> = std::result::Result<T, RowError>;
