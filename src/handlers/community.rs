use std::collections::HashSet;

use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{Datelike, Duration, Utc};
use common::{ApiResponse, CommunityStats};
use compute::{aggregate, month_window, normalize_all};
use model::entities::{carbon_entry, user};
use model::RawEntryRecord;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::EntityTrait;
use tracing::{debug, instrument, warn};

use crate::schemas::{AppState, CachedData};

/// Kilograms of CO2 a mature tree absorbs in a month, used for the
/// "equivalent trees" figure shown on the community dashboard.
const TREE_CO2_KG_PER_MONTH: Decimal = Decimal::from_parts(183, 0, 0, false, 2);

/// Get community-wide carbon statistics
#[utoipa::path(
    get,
    path = "/api/v1/community/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Community statistics retrieved successfully", body = CommunityStats),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_community_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CommunityStats>>, StatusCode> {
    let cache_key = "community".to_string();
    if let Some(CachedData::Community(stats)) = state.cache.get(&cache_key).await {
        debug!("returning cached community stats");
        let response = ApiResponse {
            data: stats,
            message: "Community statistics retrieved successfully".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let total_users = user::Entity::find()
        .all(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .len() as u64;

    let rows = carbon_entry::Entity::find()
        .all(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let records: Vec<RawEntryRecord> = rows
        .into_iter()
        .filter_map(|row| {
            let id = row.id;
            RawEntryRecord::try_from(row)
                .map_err(|err| warn!("skipping entry {}: {}", id, err))
                .ok()
        })
        .collect();
    let entries = normalize_all(&records);

    let today = Utc::now().date_naive();
    // Months taken from a valid date are always in range
    let (window_start, window_end) = month_window(today.year(), today.month())
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    let summary = aggregate(&entries, window_start, window_end);

    let activity_cutoff = today - Duration::days(30);
    let active_users = entries
        .iter()
        .filter(|entry| entry.occurred_on >= activity_cutoff)
        .map(|entry| entry.owner_id)
        .collect::<HashSet<_>>()
        .len() as u64;

    let trees_equivalent = (summary.windowed / TREE_CO2_KG_PER_MONTH)
        .round()
        .to_i64()
        .unwrap_or(0);

    let stats = CommunityStats {
        total_users,
        total_co2_tracked: summary.total,
        co2_this_month: summary.windowed,
        active_users,
        total_activities: entries.len() as u64,
        trees_equivalent,
    };

    state
        .cache
        .insert(cache_key, CachedData::Community(stats.clone()))
        .await;

    let response = ApiResponse {
        data: stats,
        message: "Community statistics retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
