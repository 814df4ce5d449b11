use thiserror::Error;

/// Raised while assembling a snapshot or one of its price values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Id must be non-negative (got {0})")]
    NegativeId(i64),

    #[error("Id {0} is out of range")]
    IdOutOfRange(i64),

    /// A required value was never supplied before `build()`.
    #[error("{0} must be set")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Item {0} not found in catalogue")]
    NotFound(u32),

    #[error("Requested item {requested} but catalogue returned {returned}")]
    IdMismatch { requested: u32, returned: u32 },
}

pub type Result<T> = std::result::Result<T, AppError>;
