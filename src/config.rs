use anyhow::Result;
use moka::future::Cache;
use sea_orm::Database;
use std::time::Duration;
use tracing::info;

use crate::schemas::AppState;

/// Initialize application state from an explicit database URL.
///
/// Configuration is injected by the caller (CLI arguments or environment
/// resolved there); nothing below this layer reads ambient state.
pub async fn initialize_app_state(database_url: &str) -> Result<AppState> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    // Cache for computed statistics responses
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    Ok(AppState { db, cache })
}
