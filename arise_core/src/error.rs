//! Error types for the arise_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for arise_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog cannot satisfy the mission invariants
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Invalid caller input (bad name, bad exercise index, double completion)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Persistence error with store context
    #[error("Store error: {0}")]
    Store(String),
}
