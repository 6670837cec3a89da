//! Migration configuration
//!
//! Loaded from an optional `config/migrate.{toml,yaml,json}` file, then
//! from `MEDAL_*` environment variables (nested keys use `__`, e.g.
//! `MEDAL_REPOSITORY__SOURCE=database`).

use medal_repository::RepositoryConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Migration configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrateConfig {
    /// Where legacy rows are read from and migrated rows written to
    pub repository: RepositoryConfig,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Translate and log, but do not write migrated rows
    pub dry_run: bool,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            repository: RepositoryConfig::file_system("achievements.json", "achievements2.json"),
            log_level: "info".to_string(),
            dry_run: false,
        }
    }
}

impl MigrateConfig {
    /// Load configuration from `config/migrate` and the environment
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/migrate").required(false));
        Self::build(builder)
    }

    /// Load configuration from an explicit file and the environment
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let builder = config::Config::builder().add_source(config::File::from(path));
        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> anyhow::Result<Self> {
        let cfg = builder
            .add_source(
                config::Environment::with_prefix("MEDAL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }
}
