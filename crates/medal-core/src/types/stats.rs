//! Stat snapshot of a single score
//!
//! Achievements reference score stats by name (`mods`, `sr`, `max_combo`,
//! ...). `ScoreStats` holds those values for one submitted score so a
//! translated condition can be checked against it.

use std::collections::HashMap;

/// Named stat values of one score
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreStats {
    values: HashMap<String, f64>,
}

impl ScoreStats {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a stat by name
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Set a stat by name (builder style)
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Mod bitmask
    pub fn with_mods(self, mods: u32) -> Self {
        self.with("mods", mods as f64)
    }

    /// Star rating
    pub fn with_star_rating(self, sr: f64) -> Self {
        self.with("sr", sr)
    }

    /// Accuracy in percent
    pub fn with_accuracy(self, accuracy: f64) -> Self {
        self.with("accuracy", accuracy)
    }

    /// Vanilla game mode (0 = std, 1 = taiko, 2 = catch, 3 = mania)
    pub fn with_mode_vn(self, mode: u8) -> Self {
        self.with("mode_vn", mode as f64)
    }

    /// Max combo, also readable as `combo`
    pub fn with_max_combo(self, combo: u32) -> Self {
        self.with("max_combo", combo as f64)
            .with("combo", combo as f64)
    }

    /// Full combo flag, stored as 1.0 / 0.0
    pub fn with_perfect(self, perfect: bool) -> Self {
        self.with("perfect", if perfect { 1.0 } else { 0.0 })
    }

    /// Hit counts in the order 300, 100, 50, miss
    pub fn with_hits(self, n300: u32, n100: u32, n50: u32, nmiss: u32) -> Self {
        self.with("300", n300 as f64)
            .with("100", n100 as f64)
            .with("50", n50 as f64)
            .with("miss", nmiss as f64)
    }

    /// Geki and katu counts
    pub fn with_geki_katu(self, ngeki: u32, nkatu: u32) -> Self {
        self.with("geki", ngeki as f64).with("katu", nkatu as f64)
    }

    /// Look up a stat by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}
