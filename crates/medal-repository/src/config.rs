//! Repository configuration types
//!
//! Selects where legacy achievements are read from and where migrated
//! achievements are written to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Repository source type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositorySource {
    /// JSON files on disk
    #[default]
    FileSystem,
    /// MySQL database
    Database,
    /// In-memory rows (for testing or dry runs)
    Memory,
}

/// Repository configuration
///
/// # Examples
///
/// ```rust
/// use medal_repository::RepositoryConfig;
///
/// // File system repository
/// let config = RepositoryConfig::file_system("achievements.json", "achievements2.json");
///
/// // Database repository
/// let config = RepositoryConfig::database("mysql://root@localhost:3306/gulag");
///
/// // Memory repository (for testing)
/// let config = RepositoryConfig::memory();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Configuration source type
    #[serde(default)]
    pub source: RepositorySource,

    /// JSON file with legacy rows (required for FileSystem source)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_path: Option<String>,

    /// JSON file migrated rows are written to (required for FileSystem source)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,

    /// Database connection URL (required for Database source)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
}

impl RepositoryConfig {
    /// Create a file system repository configuration
    pub fn file_system(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            source: RepositorySource::FileSystem,
            input_path: Some(input.into()),
            output_path: Some(output.into()),
            database_url: None,
        }
    }

    /// Create a database repository configuration
    pub fn database(url: impl Into<String>) -> Self {
        Self {
            source: RepositorySource::Database,
            input_path: None,
            output_path: None,
            database_url: Some(url.into()),
        }
    }

    /// Create a memory repository configuration
    pub fn memory() -> Self {
        Self {
            source: RepositorySource::Memory,
            ..Self::default()
        }
    }

    /// Validate the configuration
    ///
    /// Returns an error if required fields are missing for the selected source.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.source {
            RepositorySource::FileSystem => {
                if self.input_path.is_none() {
                    return Err(ConfigError::missing("FileSystem", "input_path"));
                }
                if self.output_path.is_none() {
                    return Err(ConfigError::missing("FileSystem", "output_path"));
                }
            }
            RepositorySource::Database => {
                if self.database_url.is_none() {
                    return Err(ConfigError::missing("Database", "database_url"));
                }
            }
            RepositorySource::Memory => {}
        }
        Ok(())
    }
}

/// Configuration error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A required field is missing for the selected source
    #[error("{backend} source requires {field} to be set")]
    MissingField { backend: String, field: String },

    /// The selected source is not available in this build
    #[error("{0} source is not enabled in this build")]
    Unsupported(String),
}

impl ConfigError {
    fn missing(backend: &str, field: &str) -> Self {
        ConfigError::MissingField {
            backend: backend.to_string(),
            field: field.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_system_config() {
        let config = RepositoryConfig::file_system("in.json", "out.json");

        assert_eq!(config.source, RepositorySource::FileSystem);
        assert_eq!(config.input_path, Some("in.json".to_string()));
        assert_eq!(config.output_path, Some("out.json".to_string()));
        assert!(config.database_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_config() {
        let config = RepositoryConfig::database("mysql://root@localhost/gulag");

        assert_eq!(config.source, RepositorySource::Database);
        assert!(config.input_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_memory_config() {
        let config = RepositoryConfig::memory();

        assert_eq!(config.source, RepositorySource::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_missing_paths() {
        let config = RepositoryConfig::default();
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingField {
                backend: "FileSystem".to_string(),
                field: "input_path".to_string(),
            })
        );

        let config = RepositoryConfig {
            input_path: Some("in.json".to_string()),
            ..RepositoryConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_database_url() {
        let config = RepositoryConfig {
            source: RepositorySource::Database,
            ..RepositoryConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_source_deserializes_lowercase() {
        let config: RepositoryConfig =
            serde_json::from_str(r#"{"source":"database","database_url":"mysql://x"}"#).unwrap();
        assert_eq!(config.source, RepositorySource::Database);
    }

    #[test]
    fn test_default_source() {
        assert_eq!(RepositorySource::default(), RepositorySource::FileSystem);
    }
}
