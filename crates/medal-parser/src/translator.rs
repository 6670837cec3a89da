//! Expression translator
//!
//! Runs the splitter over an expression, classifies each clause and
//! assembles the recognized conditions into a single `and` node.

use crate::classifier::classify_clause_kind;
use crate::error::Result;
use crate::splitter::split_clauses;
use medal_core::Conjunction;

/// Result of translating one expression
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    /// Recognized conditions, in source order
    pub conjunction: Conjunction,
    /// Clauses that matched no known form, in source order
    pub dropped: Vec<String>,
}

impl Translation {
    /// Returns true if every clause was recognized
    pub fn is_lossless(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Serialize the conjunction to the canonical JSON document
    ///
    /// Dropped clauses are not part of the document.
    pub fn to_json(&self) -> Result<String> {
        Ok(self.conjunction.to_json()?)
    }

    /// Serialize the conjunction to a JSON value
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(self.conjunction.to_value()?)
    }
}

/// Translator from condition expressions to condition ASTs
#[derive(Debug, Default, Clone, Copy)]
pub struct Translator;

impl Translator {
    /// Create a new translator
    pub fn new() -> Self {
        Self
    }

    /// Translate an expression, keeping track of dropped clauses
    pub fn translate(&self, expression: &str) -> Translation {
        let mut translation = Translation::default();

        for clause in split_clauses(expression) {
            match classify_clause_kind(clause) {
                Some((_, condition)) => translation.conjunction.conditions.push(condition),
                None if clause.trim().is_empty() => {}
                None => {
                    log::debug!("dropping unrecognized clause '{}'", clause.trim());
                    translation.dropped.push(clause.trim().to_string());
                }
            }
        }

        translation
    }

    /// Translate an expression into its condition AST
    pub fn parse(&self, expression: &str) -> Conjunction {
        self.translate(expression).conjunction
    }
}

/// Translate a condition expression into its JSON document
///
/// ```
/// let json = medal_parser::translate("garbage clause").unwrap();
/// assert_eq!(json, r#"{"type":"and","conditions":[]}"#);
/// ```
pub fn translate(expression: &str) -> Result<String> {
    Translator::new().translate(expression).to_json()
}

/// Translate a condition expression into a JSON value
pub fn translate_value(expression: &str) -> Result<serde_json::Value> {
    Translator::new().translate(expression).to_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use medal_core::{CompareOp, Condition};

    #[test]
    fn test_translate_tracks_dropped_clauses() {
        let translation = Translator::new()
            .translate("(1 <= score.sr < 2) and score.max_combo >= 100 and what");

        assert_eq!(
            translation.conjunction.conditions,
            vec![Condition::range("sr", 1, 2)]
        );
        assert_eq!(translation.dropped, vec!["score.max_combo >= 100", "what"]);
        assert!(!translation.is_lossless());
    }

    #[test]
    fn test_translate_lossless() {
        let translation = Translator::new().translate("mode_vn == 0 and score.perfect");

        assert!(translation.is_lossless());
        assert_eq!(
            translation.conjunction.conditions,
            vec![
                Condition::compare("mode_vn", CompareOp::Eq, 0),
                Condition::compare("perfect", CompareOp::Eq, 1),
            ]
        );
    }

    #[test]
    fn test_empty_expression_is_empty_conjunction() {
        let translation = Translator::new().translate("");
        assert!(translation.conjunction.is_empty());
        assert!(translation.dropped.is_empty());
        assert_eq!(translation.to_json().unwrap(), r#"{"type":"and","conditions":[]}"#);
    }

    #[test]
    fn test_parse_returns_conjunction() {
        let root = Translator::new().parse("score.mods & 8");
        assert_eq!(root.conditions, vec![Condition::bit_ne("mods", 8)]);
    }
}
