//! Medal Core - AST types and evaluation for achievement conditions
//!
//! This crate provides the types shared across the medal workspace:
//! - The condition AST (`Conjunction` root and its `Condition` leaves)
//! - Numeric literals that keep integers and floats apart
//! - Stat lookup and evaluation of a condition against a score
//! - Error types

pub mod ast;
pub mod error;
pub mod eval;
pub mod types;

// Re-export commonly used types
pub use ast::{CompareOp, Condition, Conjunction};
pub use error::CoreError;
pub use eval::StatLookup;
pub use types::{Number, ScoreStats};
