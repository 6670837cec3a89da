//! Unit tests for the condition AST
//!
//! Covers the stored document shape that downstream consumers read back.

use medal_core::{CompareOp, Condition, Conjunction, Number, ScoreStats};

// =============================================================================
// Document Shape Tests
// =============================================================================

#[test]
fn test_full_document_shape() {
    let root = Conjunction::new(vec![
        Condition::bit_ne("mods", 1),
        Condition::compare("mode_vn", CompareOp::Eq, 0),
        Condition::compare("max_combo", CompareOp::Ge, 2000),
    ]);

    assert_eq!(
        root.to_json().unwrap(),
        concat!(
            r#"{"type":"and","conditions":["#,
            r#"{"type":"bit_ne","stat":"mods","mask":1},"#,
            r#"{"type":"compare","stat":"mode_vn","op":"==","value":0},"#,
            r#"{"type":"compare","stat":"max_combo","op":">=","value":2000}"#,
            r#"]}"#
        )
    );
}

#[test]
fn test_serialization_is_stable() {
    let root = Conjunction::new(vec![
        Condition::range("sr", 4.5, 5),
        Condition::bit_eq("mods", 1, 0),
    ]);

    assert_eq!(root.to_json().unwrap(), root.to_json().unwrap());
}

#[test]
fn test_stored_document_reads_back() {
    let root = Conjunction::new(vec![
        Condition::range("sr", 1, 2),
        Condition::compare("perfect", CompareOp::Eq, 1),
    ]);
    let json = root.to_json().unwrap();

    let restored = Conjunction::from_json(&json).unwrap();
    assert_eq!(restored, root);
    assert_eq!(restored.len(), 2);
}

#[test]
fn test_value_document_matches_string_document() {
    let root = Conjunction::new(vec![Condition::bit_ne("mods", 8)]);
    let value = root.to_value().unwrap();

    assert_eq!(value["type"], "and");
    assert_eq!(value["conditions"][0]["type"], "bit_ne");
    assert_eq!(value["conditions"][0]["mask"], 8);
}

// =============================================================================
// Evaluation Tests
// =============================================================================

#[test]
fn test_evaluate_stored_document() {
    let root = Conjunction::from_json(
        r#"{"type":"and","conditions":[
            {"type":"bit_eq","stat":"mods","mask":1,"equals":0},
            {"type":"range","stat":"sr","min":5,"max":6}
        ]}"#,
    )
    .unwrap();

    let passing = ScoreStats::new().with_mods(16).with_star_rating(5.5);
    let nofail = ScoreStats::new().with_mods(1).with_star_rating(5.5);

    assert!(root.eval(&passing));
    assert!(!root.eval(&nofail));
}

#[test]
fn test_float_value_survives_read_back() {
    let root = Conjunction::from_json(
        r#"{"type":"and","conditions":[{"type":"compare","stat":"accuracy","op":">=","value":99.5}]}"#,
    )
    .unwrap();

    match &root.conditions[0] {
        Condition::Compare { value, .. } => assert_eq!(*value, Number::Float(99.5)),
        other => panic!("Expected compare, got {:?}", other),
    }
}
