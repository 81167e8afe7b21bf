use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tracing::info;

/// Initialize the database by running all pending migrations
pub async fn run(database_url: &str) -> Result<()> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    info!("Running migrations");
    Migrator::up(&db, None).await?;

    info!("Database initialized successfully");
    Ok(())
}
