//! Backend selection from configuration

use medal_repository::{
    AchievementStore, FileSystemRepository, MemoryRepository, RepositoryConfig, RepositoryError,
    RepositoryResult, RepositorySource,
};

/// Open the store selected by the repository configuration
pub async fn open_store(config: &RepositoryConfig) -> RepositoryResult<Box<dyn AchievementStore>> {
    config.validate()?;

    match config.source {
        RepositorySource::FileSystem => match (&config.input_path, &config.output_path) {
            (Some(input), Some(output)) => {
                tracing::info!("Using file system repository: {} -> {}", input, output);
                Ok(Box::new(FileSystemRepository::new(input, output)?))
            }
            _ => Err(RepositoryError::Other(
                "file system source requires input_path and output_path".to_string(),
            )),
        },
        RepositorySource::Database => open_database(config).await,
        RepositorySource::Memory => {
            tracing::info!("Using empty in-memory repository");
            Ok(Box::new(MemoryRepository::new()))
        }
    }
}

#[cfg(feature = "mysql")]
async fn open_database(config: &RepositoryConfig) -> RepositoryResult<Box<dyn AchievementStore>> {
    let url = config.database_url.as_deref().unwrap_or_default();
    tracing::info!("Using MySQL repository");
    Ok(Box::new(medal_repository::MySqlRepository::new(url).await?))
}

#[cfg(not(feature = "mysql"))]
async fn open_database(_config: &RepositoryConfig) -> RepositoryResult<Box<dyn AchievementStore>> {
    Err(medal_repository::ConfigError::Unsupported("Database".to_string()).into())
}
