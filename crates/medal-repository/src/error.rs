//! Error types for the repository layer

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid path provided
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Invalid repository configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database error (when database feature is enabled)
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Generic error
    #[error("Repository error: {0}")]
    Other(String),
}
