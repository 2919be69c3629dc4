use thiserror::Error;

/// Error type that captures storage, configuration, and input failures.
///
/// Engine mutations never surface these to callers; they are produced by the
/// storage backends, the configuration layer, and the optional validation helpers.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Storage quota exceeded: {needed} bytes needed, {limit} bytes available")]
    QuotaExceeded { needed: usize, limit: usize },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
