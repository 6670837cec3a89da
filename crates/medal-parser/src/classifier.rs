//! Clause classifier
//!
//! Each clause is matched against an ordered list of rules. A rule has a
//! cheap textual predicate and a pattern parser; the first rule whose
//! predicate holds and whose parser succeeds wins. A rule whose predicate
//! holds but whose parser fails falls through to the next rule.
//!
//! | Order | Kind | Predicate | Pattern |
//! |---|---|---|---|
//! | 1 | bit test | `&`, no `==` | `score.<stat> & <mask>` |
//! | 2 | bit equality | `&` and `==` | `score.<stat> & <mask> == <equals>` |
//! | 3 | range | `<=` and a bare `<` | `<min> <= score.<stat> < <max>` |
//! | 4 | lower bound | `<=`, no bare `<` | `<min> <= score.<stat>` |
//! | 5 | equality | `==` | `[score.]<stat> == <value>` |
//! | 6 | flag | starts with `score.` | `score.<stat>` |
//!
//! Patterns search anywhere in the clause; they are not anchored. Word,
//! digit and whitespace classes are ASCII-only: `8٣` reads as the digit `8`
//! followed by a non-digit, and a non-breaking space is not whitespace.

use crate::number::{parse_number, parse_unsigned};
use crate::splitter::unwrap_parens;
use medal_core::{CompareOp, Condition, Number};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static BIT_TEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)score\.(\w+)[\t\n\f\r ]*&[\t\n\f\r ]*(\d+)").expect("valid regex")
});

static BIT_EQUALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?-u)score\.(\w+)[\t\n\f\r ]*&[\t\n\f\r ]*(\d+)[\t\n\f\r ]*==[\t\n\f\r ]*(\d+)",
    )
    .expect("valid regex")
});

static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?-u)(\d+(?:\.\d+)?)[\t\n\f\r ]*<=[\t\n\f\r ]*score\.(\w+)[\t\n\f\r ]*<[\t\n\f\r ]*(\d+(?:\.\d+)?)",
    )
    .expect("valid regex")
});

static LOWER_BOUND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)(\d+(?:\.\d+)?)[\t\n\f\r ]*<=[\t\n\f\r ]*score\.(\w+)")
        .expect("valid regex")
});

static EQUALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)(?:score\.)?(\w+)[\t\n\f\r ]*==[\t\n\f\r ]*(\d+(?:\.\d+)?)")
        .expect("valid regex")
});

static FLAG_STAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)^\w+$").expect("valid regex"));

const SCORE_PREFIX: &str = "score.";

/// The form a clause was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    /// `score.mods & 8`
    BitTest,
    /// `score.mods & 1 == 0`
    BitEquality,
    /// `1 <= score.sr < 2`
    Range,
    /// `2000 <= score.max_combo`
    LowerBound,
    /// `mode_vn == 0`, `score.mods == 32`
    Equality,
    /// `score.perfect`
    Flag,
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClauseKind::BitTest => "bit test",
            ClauseKind::BitEquality => "bit equality",
            ClauseKind::Range => "range",
            ClauseKind::LowerBound => "lower bound",
            ClauseKind::Equality => "equality",
            ClauseKind::Flag => "flag",
        };
        f.write_str(name)
    }
}

/// Outcome of classifying one clause
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseMatch {
    /// The clause was recognized
    Matched(Condition),
    /// No rule recognized the clause; it contributes nothing
    Unmatched,
}

impl ClauseMatch {
    /// Returns the condition if the clause was recognized
    pub fn into_condition(self) -> Option<Condition> {
        match self {
            ClauseMatch::Matched(condition) => Some(condition),
            ClauseMatch::Unmatched => None,
        }
    }

    /// Returns true if the clause was recognized
    pub fn is_matched(&self) -> bool {
        matches!(self, ClauseMatch::Matched(_))
    }
}

impl From<Option<Condition>> for ClauseMatch {
    fn from(condition: Option<Condition>) -> Self {
        condition.map_or(ClauseMatch::Unmatched, ClauseMatch::Matched)
    }
}

/// One entry of the classification cascade
struct ClauseRule {
    kind: ClauseKind,
    applies: fn(&str) -> bool,
    parse: fn(&str) -> Option<Condition>,
}

/// Classification order is significant: first applicable rule that parses wins
static RULES: [ClauseRule; 6] = [
    ClauseRule {
        kind: ClauseKind::BitTest,
        applies: is_bit_test,
        parse: parse_bit_test,
    },
    ClauseRule {
        kind: ClauseKind::BitEquality,
        applies: is_bit_equality,
        parse: parse_bit_equality,
    },
    ClauseRule {
        kind: ClauseKind::Range,
        applies: is_range,
        parse: parse_range,
    },
    ClauseRule {
        kind: ClauseKind::LowerBound,
        applies: is_lower_bound,
        parse: parse_lower_bound,
    },
    ClauseRule {
        kind: ClauseKind::Equality,
        applies: is_equality,
        parse: parse_equality,
    },
    ClauseRule {
        kind: ClauseKind::Flag,
        applies: is_flag,
        parse: parse_flag,
    },
];

/// Classify one clause and extract its condition
///
/// The clause is trimmed and one enclosing parenthesis pair is removed
/// before classification.
pub fn classify_clause(clause: &str) -> ClauseMatch {
    classify_clause_kind(clause)
        .map(|(_, condition)| condition)
        .into()
}

/// Classify one clause, also reporting which rule recognized it
pub fn classify_clause_kind(clause: &str) -> Option<(ClauseKind, Condition)> {
    let body = unwrap_parens(clause.trim());

    for rule in RULES.iter() {
        if !(rule.applies)(body) {
            continue;
        }
        match (rule.parse)(body) {
            Some(condition) => {
                log::trace!("clause '{}' recognized as {}", body, rule.kind);
                return Some((rule.kind, condition));
            }
            None => {
                log::trace!("clause '{}' looked like {} but did not parse", body, rule.kind);
            }
        }
    }

    None
}

/// True if a `<` remains after removing every `<=`
fn contains_plain_less_than(s: &str) -> bool {
    s.replace("<=", "").contains('<')
}

fn is_bit_test(c: &str) -> bool {
    c.contains('&') && !c.contains("==")
}

fn is_bit_equality(c: &str) -> bool {
    c.contains('&') && c.contains("==")
}

fn is_range(c: &str) -> bool {
    c.contains("<=") && contains_plain_less_than(c)
}

fn is_lower_bound(c: &str) -> bool {
    c.contains("<=") && !contains_plain_less_than(c)
}

fn is_equality(c: &str) -> bool {
    c.contains("==")
}

fn is_flag(c: &str) -> bool {
    c.starts_with(SCORE_PREFIX)
}

fn parse_bit_test(src: &str) -> Option<Condition> {
    let caps = BIT_TEST.captures(src)?;
    let mask = parse_unsigned(&caps[2])?;
    Some(Condition::bit_ne(&caps[1], mask))
}

fn parse_bit_equality(src: &str) -> Option<Condition> {
    let caps = BIT_EQUALITY.captures(src)?;
    let mask = parse_unsigned(&caps[2])?;
    let equals = parse_unsigned(&caps[3])?;
    Some(Condition::bit_eq(&caps[1], mask, equals))
}

fn parse_range(src: &str) -> Option<Condition> {
    let caps = RANGE.captures(src)?;
    let min = parse_number(&caps[1])?;
    let max = parse_number(&caps[3])?;
    Some(Condition::range(&caps[2], min, max))
}

// Only the lower bound is expressible; `score.x <= N` is not a known form.
fn parse_lower_bound(src: &str) -> Option<Condition> {
    let caps = LOWER_BOUND.captures(src)?;
    let min = parse_number(&caps[1])?;
    Some(Condition::compare(&caps[2], CompareOp::Ge, min))
}

fn parse_equality(src: &str) -> Option<Condition> {
    let caps = EQUALITY.captures(src)?;
    let value = parse_number(&caps[2])?;
    Some(Condition::compare(&caps[1], CompareOp::Eq, value))
}

/// A bare `score.<stat>` reference means the stat is truthy
fn parse_flag(src: &str) -> Option<Condition> {
    let stat = src.strip_prefix(SCORE_PREFIX)?;
    if !FLAG_STAT.is_match(stat) {
        return None;
    }
    Some(Condition::compare(stat, CompareOp::Eq, Number::Int(1)))
}
