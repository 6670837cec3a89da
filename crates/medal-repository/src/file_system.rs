//! File system based repository implementation
//!
//! Legacy rows are read from a JSON array file. Migrated rows are buffered
//! and written as a JSON array to the output file on [`AchievementSink::flush`].

use async_trait::async_trait;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

use crate::{error::RepositoryError, traits::*, Achievement, LegacyAchievement, RepositoryResult};

/// File system based repository
pub struct FileSystemRepository {
    /// JSON file with legacy rows
    input_path: PathBuf,
    /// JSON file migrated rows are written to
    output_path: PathBuf,
    /// Rows inserted since construction
    pending: RwLock<Vec<Achievement>>,
}

impl FileSystemRepository {
    /// Create a new file system repository
    ///
    /// # Arguments
    /// * `input_path` - Existing JSON file holding an array of legacy rows
    /// * `output_path` - File the migrated rows are written to (created on flush)
    ///
    /// # Example
    /// ```no_run
    /// use medal_repository::FileSystemRepository;
    ///
    /// let repo = FileSystemRepository::new("achievements.json", "achievements2.json").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        input_path: P,
        output_path: Q,
    ) -> RepositoryResult<Self> {
        let input = input_path.as_ref();

        if !input.is_file() {
            return Err(RepositoryError::InvalidPath {
                path: input.to_path_buf(),
            });
        }

        Ok(Self {
            input_path: absolutize(input)?,
            output_path: absolutize(output_path.as_ref())?,
            pending: RwLock::new(Vec::new()),
        })
    }

    /// Absolute path of the legacy rows file
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Absolute path of the migrated rows file
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

fn absolutize(path: &Path) -> RepositoryResult<PathBuf> {
    Ok(path
        .absolutize()
        .map_err(|e| RepositoryError::Other(format!("Failed to absolutize path: {}", e)))?
        .to_path_buf())
}

#[async_trait]
impl AchievementSource for FileSystemRepository {
    async fn fetch_all(&self) -> RepositoryResult<Vec<LegacyAchievement>> {
        let content = fs::read_to_string(&self.input_path).await?;
        let rows: Vec<LegacyAchievement> = serde_json::from_str(&content)?;
        tracing::debug!(
            "loaded {} legacy achievements from {}",
            rows.len(),
            self.input_path.display()
        );
        Ok(rows)
    }
}

#[async_trait]
impl AchievementSink for FileSystemRepository {
    async fn insert(&self, achievement: &Achievement) -> RepositoryResult<()> {
        self.pending.write().await.push(achievement.clone());
        Ok(())
    }

    async fn flush(&self) -> RepositoryResult<()> {
        let rows = self.pending.read().await;

        if let Some(parent) = self.output_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(&*rows)?;
        fs::write(&self.output_path, content).await?;
        tracing::debug!(
            "wrote {} achievements to {}",
            rows.len(),
            self.output_path.display()
        );
        Ok(())
    }
}
