//! Core trait definitions for the repository pattern
//!
//! - [`AchievementSource`]: read side, yields legacy rows
//! - [`AchievementSink`]: write side, accepts migrated rows
//!
//! Both are `Send + Sync` so a backend can be shared across tasks.

use async_trait::async_trait;

use crate::{Achievement, LegacyAchievement, RepositoryResult};

/// Source of legacy achievement rows
#[async_trait]
pub trait AchievementSource: Send + Sync {
    /// Load every legacy row, in storage order
    async fn fetch_all(&self) -> RepositoryResult<Vec<LegacyAchievement>>;
}

/// Destination for migrated achievement rows
#[async_trait]
pub trait AchievementSink: Send + Sync {
    /// Store one migrated row
    async fn insert(&self, achievement: &Achievement) -> RepositoryResult<()>;

    /// Persist buffered rows, for backends that buffer
    async fn flush(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

/// A backend that is both a source and a sink
pub trait AchievementStore: AchievementSource + AchievementSink {}

impl<T: AchievementSource + AchievementSink + ?Sized> AchievementStore for T {}
