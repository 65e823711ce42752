use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Failed to initialize review store: {0}")]
    StoreInit(#[source] rusqlite::Error),

    #[error("Review store error: {0}")]
    StoreIo(#[source] rusqlite::Error),

    #[error("Invalid chord symbol: {0}")]
    InvalidChordSymbol(String),

    #[error("Corrupt record for '{chord_symbol}': {reason}")]
    CorruptRecord { chord_symbol: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DrillError>;
