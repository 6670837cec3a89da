//! In-memory repository implementation

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{traits::*, Achievement, LegacyAchievement, RepositoryResult};

/// In-memory repository
///
/// Serves a fixed list of legacy rows and records migrated rows in insert
/// order.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    legacy: Vec<LegacyAchievement>,
    migrated: RwLock<Vec<Achievement>>,
}

impl MemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository serving the given legacy rows
    pub fn with_legacy(legacy: Vec<LegacyAchievement>) -> Self {
        Self {
            legacy,
            migrated: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the migrated rows inserted so far
    pub async fn migrated(&self) -> Vec<Achievement> {
        self.migrated.read().await.clone()
    }
}

#[async_trait]
impl AchievementSource for MemoryRepository {
    async fn fetch_all(&self) -> RepositoryResult<Vec<LegacyAchievement>> {
        Ok(self.legacy.clone())
    }
}

#[async_trait]
impl AchievementSink for MemoryRepository {
    async fn insert(&self, achievement: &Achievement) -> RepositoryResult<()> {
        self.migrated.write().await.push(achievement.clone());
        Ok(())
    }
}
