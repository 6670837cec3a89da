//! Evaluation of translated conditions against a score
//!
//! A stat that the score does not provide reads as `0.0`. Bitmask
//! conditions truncate the stat to a `u32` before masking;
//! negative values read as 0 and values past `u32::MAX` saturate.

use crate::ast::{Condition, Conjunction};
use crate::types::ScoreStats;
use std::collections::HashMap;

/// Source of named stat values
pub trait StatLookup {
    /// Look up a stat by name, `None` if the score has no such stat
    fn stat(&self, name: &str) -> Option<f64>;
}

impl StatLookup for ScoreStats {
    fn stat(&self, name: &str) -> Option<f64> {
        self.get(name)
    }
}

impl StatLookup for HashMap<String, f64> {
    fn stat(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

fn read_stat<S: StatLookup + ?Sized>(stats: &S, name: &str) -> f64 {
    match stats.stat(name) {
        Some(value) => value,
        None => {
            log::trace!("stat '{}' not present, reading as 0", name);
            0.0
        }
    }
}

impl Condition {
    /// Check this condition against a score's stats
    pub fn eval<S: StatLookup + ?Sized>(&self, stats: &S) -> bool {
        match self {
            Condition::Compare { stat, op, value } => {
                op.apply(read_stat(stats, stat), value.as_f64())
            }

            Condition::Range { stat, min, max } => {
                let actual = read_stat(stats, stat);
                actual >= min.as_f64() && actual < max.as_f64()
            }

            Condition::BitEq { stat, mask, equals } => {
                let actual = read_stat(stats, stat) as u32;
                (actual & mask) == *equals
            }

            Condition::BitNe { stat, mask } => {
                let actual = read_stat(stats, stat) as u32;
                (actual & mask) != 0
            }
        }
    }
}

impl Conjunction {
    /// Check every condition against a score's stats; empty is always true
    pub fn eval<S: StatLookup + ?Sized>(&self, stats: &S) -> bool {
        self.conditions.iter().all(|c| c.eval(stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::CompareOp;

    #[test]
    fn test_compare_eq_and_ge() {
        let stats = ScoreStats::new().with_mode_vn(0).with_max_combo(2500);

        assert!(Condition::compare("mode_vn", CompareOp::Eq, 0).eval(&stats));
        assert!(Condition::compare("max_combo", CompareOp::Ge, 2000).eval(&stats));
        assert!(!Condition::compare("max_combo", CompareOp::Ge, 3000).eval(&stats));
    }

    #[test]
    fn test_range_is_half_open() {
        let cond = Condition::range("sr", 1, 2);

        assert!(cond.eval(&ScoreStats::new().with_star_rating(1.0)));
        assert!(cond.eval(&ScoreStats::new().with_star_rating(1.99)));
        assert!(!cond.eval(&ScoreStats::new().with_star_rating(2.0)));
        assert!(!cond.eval(&ScoreStats::new().with_star_rating(0.5)));
    }

    #[test]
    fn test_bit_conditions() {
        // HD (8) + DT (64)
        let stats = ScoreStats::new().with_mods(72);

        assert!(Condition::bit_ne("mods", 8).eval(&stats));
        assert!(!Condition::bit_ne("mods", 1).eval(&stats));
        assert!(Condition::bit_eq("mods", 1, 0).eval(&stats));
        assert!(Condition::bit_eq("mods", 72, 72).eval(&stats));
        assert!(!Condition::bit_eq("mods", 16, 16).eval(&stats));
    }

    #[test]
    fn test_missing_stat_reads_as_zero() {
        let stats: HashMap<String, f64> = HashMap::new();

        assert!(Condition::compare("perfect", CompareOp::Eq, 0).eval(&stats));
        assert!(!Condition::bit_ne("mods", 1).eval(&stats));
    }

    #[test]
    fn test_conjunction_eval() {
        let stats = ScoreStats::new().with_mods(8).with_perfect(true);
        let root = Conjunction::new(vec![
            Condition::bit_ne("mods", 8),
            Condition::compare("perfect", CompareOp::Eq, 1),
        ]);
        assert!(root.eval(&stats));

        let root = Conjunction::new(vec![
            Condition::bit_ne("mods", 8),
            Condition::compare("perfect", CompareOp::Eq, 0),
        ]);
        assert!(!root.eval(&stats));

        assert!(Conjunction::default().eval(&stats));
    }
}
