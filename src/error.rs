//! Error types for hashroot

use thiserror::Error;

/// Result type alias for hashroot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or checking a hash tree
#[derive(Error, Debug)]
pub enum Error {
    /// No records to build a tree from
    #[error("Empty input: at least one record is required to form a root")]
    EmptyInput,

    /// The requested hash algorithm cannot be resolved
    #[error("Hash algorithm unavailable: {0}")]
    HashUnavailable(String),

    /// No previously persisted digest exists
    #[error("No stored digest: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// True for the recoverable "no baseline yet" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
