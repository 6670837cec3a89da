//! Numeric literal parsing
//!
//! Literals reaching this module were already matched by a digit pattern.
//! Anything that still fails to parse (overflow, a mask wider than `u32`)
//! yields `None` and the clause is treated as unrecognized.

use medal_core::Number;

/// Parse a number literal: integer text as `Int`, text with a `.` as `Float`
pub fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if text.contains('.') {
        text.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Number::Float)
    } else {
        text.parse::<i64>().ok().map(Number::Int)
    }
}

/// Parse an unsigned integer literal (bitmasks and masked values)
///
/// Masks are `u32`, so `4294967296` and wider do not parse.
pub fn parse_unsigned(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}
