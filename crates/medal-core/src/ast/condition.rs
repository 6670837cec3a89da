//! Condition AST definitions

use super::operator::CompareOp;
use crate::error::{CoreError, Result};
use crate::types::Number;
use serde::{Deserialize, Serialize};

/// A single leaf condition over one score stat
///
/// Serialized internally tagged on `type`:
///
/// ```json
/// {"type":"bit_eq","stat":"mods","mask":1,"equals":0}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Condition {
    /// `stat <op> value`
    Compare {
        stat: String,
        op: CompareOp,
        value: Number,
    },

    /// `(stat & mask) == equals`
    ///
    /// `mask` and `equals` are `u32`, the width the achievement server
    /// deserializes them into; wider literals never reach a document.
    BitEq { stat: String, mask: u32, equals: u32 },

    /// `(stat & mask) != 0`, any bit of the mask is set
    BitNe { stat: String, mask: u32 },

    /// `min <= stat < max`
    Range { stat: String, min: Number, max: Number },
}

impl Condition {
    /// Create a compare condition
    pub fn compare(stat: impl Into<String>, op: CompareOp, value: impl Into<Number>) -> Self {
        Condition::Compare {
            stat: stat.into(),
            op,
            value: value.into(),
        }
    }

    /// Create a bitmask equality condition
    pub fn bit_eq(stat: impl Into<String>, mask: u32, equals: u32) -> Self {
        Condition::BitEq {
            stat: stat.into(),
            mask,
            equals,
        }
    }

    /// Create a bitmask test condition
    pub fn bit_ne(stat: impl Into<String>, mask: u32) -> Self {
        Condition::BitNe {
            stat: stat.into(),
            mask,
        }
    }

    /// Create a range condition (inclusive min, exclusive max)
    pub fn range(stat: impl Into<String>, min: impl Into<Number>, max: impl Into<Number>) -> Self {
        Condition::Range {
            stat: stat.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// The stat this condition reads
    pub fn stat(&self) -> &str {
        match self {
            Condition::Compare { stat, .. }
            | Condition::BitEq { stat, .. }
            | Condition::BitNe { stat, .. }
            | Condition::Range { stat, .. } => stat,
        }
    }

    /// The `type` tag this condition serializes with
    pub fn kind(&self) -> &'static str {
        match self {
            Condition::Compare { .. } => "compare",
            Condition::BitEq { .. } => "bit_eq",
            Condition::BitNe { .. } => "bit_ne",
            Condition::Range { .. } => "range",
        }
    }
}

/// Root of a translated condition: every child must hold
///
/// Always serialized as an `and` node, even with zero or one child. An empty
/// conjunction means no constraint was recognized and evaluates to true.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "and")]
pub struct Conjunction {
    /// Leaf conditions in source order
    pub conditions: Vec<Condition>,
}

impl Conjunction {
    /// Create a conjunction over the given conditions
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// Number of conditions
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Returns true if no condition was recognized
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Iterate over the conditions in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Condition> {
        self.conditions.iter()
    }

    /// Serialize to the canonical JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to a JSON value
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Read a stored JSON document back
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Read a stored JSON value back, rejecting roots that are not `and` nodes
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        match value.get("type").and_then(|t| t.as_str()) {
            Some("and") => Ok(serde_json::from_value(value)?),
            Some(other) => Err(CoreError::InvalidDocument(format!(
                "expected root type 'and', got '{}'",
                other
            ))),
            None => Err(CoreError::InvalidDocument(
                "missing root 'type' field".to_string(),
            )),
        }
    }
}

impl From<Vec<Condition>> for Conjunction {
    fn from(conditions: Vec<Condition>) -> Self {
        Self::new(conditions)
    }
}

impl<'a> IntoIterator for &'a Conjunction {
    type Item = &'a Condition;
    type IntoIter = std::slice::Iter<'a, Condition>;

    fn into_iter(self) -> Self::IntoIter {
        self.conditions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_eq_serialization() {
        let cond = Condition::bit_eq("mods", 1, 0);
        assert_eq!(
            serde_json::to_string(&cond).unwrap(),
            r#"{"type":"bit_eq","stat":"mods","mask":1,"equals":0}"#
        );
    }

    #[test]
    fn test_mask_wider_than_u32_is_rejected_on_read() {
        let max = r#"{"type":"bit_ne","stat":"mods","mask":4294967295}"#;
        let cond: Condition = serde_json::from_str(max).unwrap();
        assert_eq!(cond, Condition::bit_ne("mods", u32::MAX));
        assert_eq!(serde_json::to_string(&cond).unwrap(), max);

        let wide = r#"{"type":"bit_ne","stat":"mods","mask":4294967296}"#;
        assert!(serde_json::from_str::<Condition>(wide).is_err());
    }

    #[test]
    fn test_compare_serialization_keeps_integers() {
        let cond = Condition::compare("max_combo", CompareOp::Ge, 2000);
        assert_eq!(
            serde_json::to_string(&cond).unwrap(),
            r#"{"type":"compare","stat":"max_combo","op":">=","value":2000}"#
        );
    }

    #[test]
    fn test_range_serialization_with_float() {
        let cond = Condition::range("sr", 1.5, 2);
        assert_eq!(
            serde_json::to_string(&cond).unwrap(),
            r#"{"type":"range","stat":"sr","min":1.5,"max":2}"#
        );
    }

    #[test]
    fn test_empty_conjunction_is_explicit_array() {
        let root = Conjunction::default();
        assert_eq!(root.to_json().unwrap(), r#"{"type":"and","conditions":[]}"#);
    }

    #[test]
    fn test_conjunction_from_json() {
        let root = Conjunction::from_json(
            r#"{"type":"and","conditions":[{"type":"bit_ne","stat":"mods","mask":8}]}"#,
        )
        .unwrap();
        assert_eq!(root.conditions, vec![Condition::bit_ne("mods", 8)]);
    }

    #[test]
    fn test_conjunction_rejects_other_roots() {
        let err = Conjunction::from_json(r#"{"type":"or","conditions":[]}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDocument(_)));

        let err = Conjunction::from_json(r#"{"conditions":[]}"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDocument(_)));
    }

    #[test]
    fn test_condition_accessors() {
        let cond = Condition::range("sr", 1, 2);
        assert_eq!(cond.stat(), "sr");
        assert_eq!(cond.kind(), "range");
        assert_eq!(Condition::bit_ne("mods", 8).kind(), "bit_ne");
    }
}
