use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{Datelike, Utc};
use common::{ApiResponse, UserStats};
use compute::month_window;
use model::entities::user;
use sea_orm::EntityTrait;
use tracing::{debug, instrument};

use crate::helpers::stats::{build_user_stats, fetch_raw_records};
use crate::schemas::{AppState, CachedData, StatsQuery};

/// Get a user's carbon statistics for one month
///
/// Totals and goal progress are recomputed from the stored entries on every
/// cache miss; results are cached per user and month.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/stats",
    tag = "stats",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("year" = Option<i32>, Query, description = "Year for statistics, defaults to the current year"),
        ("month" = Option<u32>, Query, description = "Month for statistics (1-12), defaults to the current month"),
    ),
    responses(
        (status = 200, description = "Statistics retrieved successfully", body = UserStats),
        (status = 400, description = "Invalid month or goal", body = crate::schemas::ErrorResponse),
        (status = 404, description = "User not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user_stats(
    Path(user_id): Path<i32>,
    Query(query): Query<StatsQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UserStats>>, StatusCode> {
    let today = Utc::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    let (window_start, window_end) = month_window(year, month).ok_or(StatusCode::BAD_REQUEST)?;

    let cache_key = format!("stats_{}_{}_{}", user_id, year, month);
    if let Some(CachedData::UserStats(stats)) = state.cache.get(&cache_key).await {
        debug!("returning cached stats for user {}", user_id);
        let response = ApiResponse {
            data: stats,
            message: "Statistics retrieved successfully".to_string(),
            success: true,
        };
        return Ok(Json(response));
    }

    let user_model = user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let records = fetch_raw_records(&state.db, user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let stats = build_user_stats(&records, user_model.carbon_goal_kg, window_start, window_end)
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    state
        .cache
        .insert(cache_key, CachedData::UserStats(stats.clone()))
        .await;

    let response = ApiResponse {
        data: stats,
        message: "Statistics retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
