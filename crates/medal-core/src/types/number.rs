//! Numeric literal type
//!
//! Condition values keep the distinction between integer and decimal
//! literals so that `2000` is stored as `2000` and `1.5` as `1.5`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric literal taken from a condition expression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Literal without a decimal point
    Int(i64),
    /// Literal with a decimal point
    Float(f64),
}

impl Number {
    /// Numeric value as f64, used for evaluation
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// Returns true if the literal was an integer
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}
