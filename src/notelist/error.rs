use rowkit::RowError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotelistError {
    #[error("Position {position} is out of range for {count} rows")]
    PositionOutOfRange { position: usize, count: usize },

    #[error("Row template {template} has no {slot} slot")]
    MissingSlot { template: String, slot: String },

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Invalid UTC offset: {0} minutes")]
    InvalidOffset(i32),

    #[error("Row error: {0}")]
    Row(#[from] RowError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, NotelistError>;
