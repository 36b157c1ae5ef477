use thiserror::Error;

/// Errors surfaced by the de-identification pipeline crates.
#[derive(Debug, Error)]
pub enum DeidError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown record kind: {0}")]
    UnknownKind(String),
    #[error("raw record has no resource id")]
    MissingResourceId,
    #[error("batch source error: {0}")]
    Source(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, DeidError>;
