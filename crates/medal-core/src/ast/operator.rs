//! Comparison operators for `compare` conditions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a `compare` condition
///
/// Serialized as the operator token itself (`"=="`, `">="`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    /// Equal (==)
    #[serde(rename = "==")]
    Eq,
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    Ge,
}

impl CompareOp {
    /// The operator token as it appears in the stored document
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ge => ">=",
        }
    }

    /// Apply the operator to an actual stat value and the expected value
    pub fn apply(&self, actual: f64, expected: f64) -> bool {
        match self {
            CompareOp::Eq => (actual - expected).abs() < f64::EPSILON,
            CompareOp::Ge => actual >= expected,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_tokens() {
        assert_eq!(CompareOp::Eq.as_str(), "==");
        assert_eq!(CompareOp::Ge.to_string(), ">=");
    }

    #[test]
    fn test_operator_serde() {
        assert_eq!(serde_json::to_string(&CompareOp::Eq).unwrap(), r#""==""#);
        let op: CompareOp = serde_json::from_str(r#"">=""#).unwrap();
        assert_eq!(op, CompareOp::Ge);
        assert!(serde_json::from_str::<CompareOp>(r#""<""#).is_err());
    }

    #[test]
    fn test_operator_apply() {
        assert!(CompareOp::Eq.apply(32.0, 32.0));
        assert!(!CompareOp::Eq.apply(32.0, 33.0));
        assert!(CompareOp::Ge.apply(2000.0, 2000.0));
        assert!(CompareOp::Ge.apply(2500.0, 2000.0));
        assert!(!CompareOp::Ge.apply(1999.0, 2000.0));
    }
}
