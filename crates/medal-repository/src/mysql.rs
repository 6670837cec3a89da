//! MySQL database repository implementation
//!
//! Reads legacy rows from `achievements` and writes migrated rows to
//! `achievements2`, whose `cond` column holds the JSON document.

use async_trait::async_trait;
use sqlx::mysql::MySqlPool;

use crate::{traits::*, Achievement, LegacyAchievement, RepositoryResult};

/// MySQL database repository
pub struct MySqlRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRepository {
    /// Connect to a MySQL database
    ///
    /// # Example
    /// ```no_run
    /// use medal_repository::MySqlRepository;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let repo = MySqlRepository::new("mysql://root@localhost:3306/gulag").await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn new(database_url: &str) -> RepositoryResult<Self> {
        let pool = MySqlPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Create a repository with an existing pool
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AchievementSource for MySqlRepository {
    async fn fetch_all(&self) -> RepositoryResult<Vec<LegacyAchievement>> {
        let rows = sqlx::query_as::<_, LegacyAchievement>(
            "select id, file, name, `desc`, cond from achievements",
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("loaded {} legacy achievements", rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl AchievementSink for MySqlRepository {
    async fn insert(&self, achievement: &Achievement) -> RepositoryResult<()> {
        sqlx::query(
            "insert into achievements2 (id, file, name, `desc`, cond) values (?, ?, ?, ?, ?)",
        )
        .bind(achievement.id)
        .bind(&achievement.file)
        .bind(&achievement.name)
        .bind(&achievement.desc)
        .bind(achievement.cond.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
