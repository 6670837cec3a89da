//! Parser error types

use medal_core::CoreError;
use thiserror::Error;

/// Translator error
///
/// Unrecognized clauses are not errors; they are dropped. The only failure
/// left comes from the document layer, producing or reading back JSON.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Error raised by the condition document layer
    #[error("Condition document error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
