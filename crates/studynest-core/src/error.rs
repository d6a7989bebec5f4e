//! Error types for studynest-core

use thiserror::Error;

/// Result type alias using studynest-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in studynest-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Note source failed to produce notes
    #[error("Note source error: {0}")]
    Source(String),
}
