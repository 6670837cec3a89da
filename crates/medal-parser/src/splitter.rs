//! Clause splitter
//!
//! Breaks a condition expression into its `and`-joined clauses:
//!
//! ```text
//! (score.mods & 1) and mode_vn == 0 and 2000 <= score.max_combo
//! ```
//!
//! becomes `["(score.mods & 1)", "mode_vn == 0", "2000 <= score.max_combo"]`.

use regex::Regex;
use std::sync::LazyLock;

/// Conjunction keyword, lowercase only, with at least one ASCII whitespace
/// (space, tab, newline, form feed, carriage return) on each side
static AND_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\f\r ]+and[\t\n\f\r ]+").expect("valid regex"));

/// Remove one leading `(` and one trailing `)` if both are present
///
/// This is a syntactic unwrap: the two characters are not checked to be a
/// matching pair, so `(a) and (b)` becomes `a) and (b`.
pub fn unwrap_parens(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('(') && s.ends_with(')') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Split an expression into clauses, in source order
///
/// Every piece is returned, including ones that will later fail to
/// classify. An expression without `and` yields a single clause.
pub fn split_clauses(expression: &str) -> Vec<&str> {
    let body = unwrap_parens(expression.trim());
    AND_DELIMITER.split(body).collect()
}
