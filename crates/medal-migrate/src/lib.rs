//! Medal Migrate - batch migration of achievement conditions
//!
//! Reads every legacy achievement, translates its condition expression to
//! the JSON condition document and writes the migrated row. Rows are
//! processed one at a time in source order; the first write failure aborts
//! the run.

pub mod backend;
pub mod config;
pub mod migrator;

pub use backend::open_store;
pub use config::MigrateConfig;
pub use migrator::{MigrationSummary, Migrator};
