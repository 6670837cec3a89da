//! Error types for Medal Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid condition document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
