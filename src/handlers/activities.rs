use axum::response::Json;
use common::{ActivityInfo, ApiResponse};
use compute::emission_factor;
use model::Activity;
use tracing::instrument;

/// List every supported activity with its emission factor
///
/// The table is compiled in, so this endpoint needs no state.
#[utoipa::path(
    get,
    path = "/api/v1/activities",
    tag = "activities",
    responses(
        (status = 200, description = "Activities retrieved successfully", body = Vec<ActivityInfo>)
    )
)]
#[instrument]
pub async fn get_activities() -> Json<ApiResponse<Vec<ActivityInfo>>> {
    let activities: Vec<ActivityInfo> = Activity::all()
        .iter()
        .map(|activity| ActivityInfo {
            key: activity.key().to_string(),
            category: activity.category().to_string(),
            unit: activity.unit().to_string(),
            factor: emission_factor(*activity),
        })
        .collect();

    Json(ApiResponse {
        data: activities,
        message: "Activities retrieved successfully".to_string(),
        success: true,
    })
}
