//! Medal condition migration
//!
//! Translates every legacy achievement condition to its JSON document and
//! writes the migrated rows to the configured store.

use anyhow::Result;
use medal_migrate::{open_store, MigrateConfig, Migrator};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = MigrateConfig::load()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!("Loaded configuration: {:?}", config);

    let store = open_store(&config.repository).await?;

    if config.dry_run {
        info!("Dry run: migrated rows will not be written");
    }

    let summary = Migrator::new()
        .with_dry_run(config.dry_run)
        .run(store.as_ref(), store.as_ref())
        .await?;

    info!("migration complete");
    info!(
        "  {} achievements, {} conditions, {} dropped clauses",
        summary.migrated, summary.conditions, summary.dropped
    );
    if !summary.lossy.is_empty() {
        info!("  achievements with dropped clauses: {:?}", summary.lossy);
    }

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "medal_migrate={level},medal_repository={level},medal_parser={level},medal_core={level}"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
