//! Value types for achievement conditions
//!
//! - Numeric literals (integer or float)
//! - Stat snapshots of a single score

pub mod number;
pub mod stats;

pub use number::Number;
pub use stats::ScoreStats;
