//! Sequential migration of legacy achievements

use anyhow::{Context, Result};
use medal_parser::{Translation, Translator};
use medal_repository::{Achievement, AchievementSink, AchievementSource, LegacyAchievement};

/// Totals of one migration run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationSummary {
    /// Rows translated (and written, unless dry run)
    pub migrated: usize,
    /// Conditions recognized across all rows
    pub conditions: usize,
    /// Clauses dropped across all rows
    pub dropped: usize,
    /// Ids of rows that lost at least one clause
    pub lossy: Vec<i32>,
}

impl MigrationSummary {
    fn record(&mut self, id: i32, translation: &Translation) {
        self.migrated += 1;
        self.conditions += translation.conjunction.len();
        self.dropped += translation.dropped.len();
        if !translation.is_lossless() {
            self.lossy.push(id);
        }
    }
}

/// Migrates legacy achievement rows one at a time, in source order
#[derive(Debug, Default)]
pub struct Migrator {
    translator: Translator,
    dry_run: bool,
}

impl Migrator {
    /// Create a migrator that writes migrated rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate and log only, skipping writes
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Translate one legacy row
    pub fn migrate_one(&self, legacy: &LegacyAchievement) -> Result<(Achievement, Translation)> {
        let translation = self.translator.translate(&legacy.cond);
        let cond = translation
            .to_value()
            .with_context(|| format!("failed to serialize condition of {}", legacy.id))?;

        Ok((Achievement::migrated_from(legacy, cond), translation))
    }

    /// Migrate every row from `source` into `sink`
    ///
    /// The first failed write aborts the run; rows after it are not touched.
    pub async fn run<S, K>(&self, source: &S, sink: &K) -> Result<MigrationSummary>
    where
        S: AchievementSource + ?Sized,
        K: AchievementSink + ?Sized,
    {
        let legacy = source
            .fetch_all()
            .await
            .context("failed to fetch legacy achievements")?;
        tracing::info!("Loaded {} legacy achievements", legacy.len());

        let mut summary = MigrationSummary::default();

        for row in &legacy {
            let (achievement, translation) = self.migrate_one(row)?;

            if !translation.is_lossless() {
                tracing::warn!(
                    id = row.id,
                    dropped = ?translation.dropped,
                    "unrecognized clauses dropped from condition '{}'",
                    row.cond
                );
            }

            if !self.dry_run {
                sink.insert(&achievement)
                    .await
                    .with_context(|| format!("insert fail for {}", row.id))?;
            }

            summary.record(row.id, &translation);
            tracing::info!("migrated achievement {} ({})", row.id, row.name);
        }

        if !self.dry_run {
            sink.flush().await.context("failed to flush migrated achievements")?;
        }

        Ok(summary)
    }
}
