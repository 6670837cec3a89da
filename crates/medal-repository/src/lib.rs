//! Achievement storage for the medal condition migration
//!
//! The migration reads legacy achievement rows whose `cond` column holds a
//! condition expression and writes new rows whose `cond` holds the
//! translated JSON document. This crate provides the two sides of that:
//!
//! - [`AchievementSource`]: where legacy rows come from
//! - [`AchievementSink`]: where migrated rows go
//!
//! with three backends:
//!
//! - **Memory**: in-process rows, for tests and dry runs
//! - **File system**: JSON array files on disk
//! - **MySQL** (feature `mysql`): the `achievements` / `achievements2` tables
//!
//! # Quick Start
//!
//! ```no_run
//! use medal_repository::{AchievementSink, AchievementSource, FileSystemRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = FileSystemRepository::new("achievements.json", "achievements2.json")?;
//!
//!     for row in repo.fetch_all().await? {
//!         println!("{}: {}", row.id, row.cond);
//!     }
//!
//!     repo.flush().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod file_system;
pub mod memory;
pub mod models;
pub mod traits;

#[cfg(feature = "mysql")]
pub mod mysql;

// Re-exports - Configuration
pub use config::{ConfigError, RepositoryConfig, RepositorySource};

// Re-exports - Error
pub use error::{RepositoryError, RepositoryResult};

// Re-exports - Repositories
pub use file_system::FileSystemRepository;
pub use memory::MemoryRepository;
pub use models::*;
pub use traits::*;

#[cfg(feature = "mysql")]
pub use mysql::MySqlRepository;
