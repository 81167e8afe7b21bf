use crate::handlers::{
    activities::get_activities,
    community::get_community_stats,
    entries::{create_entry, delete_entry, get_entry, get_user_entries},
    health::health_check,
    stats::get_user_stats,
    users::{create_user, delete_user, get_user, get_users, update_user},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // User CRUD routes
        .route("/api/v1/users", post(create_user))
        .route("/api/v1/users", get(get_users))
        .route("/api/v1/users/:user_id", get(get_user))
        .route("/api/v1/users/:user_id", put(update_user))
        .route("/api/v1/users/:user_id", delete(delete_user))
        // Entry routes
        .route("/api/v1/users/:user_id/entries", post(create_entry))
        .route("/api/v1/users/:user_id/entries", get(get_user_entries))
        .route("/api/v1/entries/:entry_id", get(get_entry))
        .route("/api/v1/entries/:entry_id", delete(delete_entry))
        // Statistics routes
        .route("/api/v1/users/:user_id/stats", get(get_user_stats))
        .route("/api/v1/community/stats", get(get_community_stats))
        // Emission factor table
        .route("/api/v1/activities", get(get_activities))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
