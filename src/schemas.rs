use common::{
    ActivityInfo, CategoryEmission, CommunityStats, CreateEntryRequest, CreateUserRequest,
    EntryDto, UpdateUserRequest, UserDto, UserStats,
};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache for computed statistics
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    UserStats(UserStats),
    Community(CommunityStats),
}

/// Query parameters for the per-user statistics endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatsQuery {
    /// Year for statistics (e.g. 2025); defaults to the current year
    pub year: Option<i32>,
    /// Month for statistics (1-12); defaults to the current month
    pub month: Option<u32>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::create_user,
        crate::handlers::users::get_users,
        crate::handlers::users::get_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
        crate::handlers::entries::create_entry,
        crate::handlers::entries::get_user_entries,
        crate::handlers::entries::get_entry,
        crate::handlers::entries::delete_entry,
        crate::handlers::stats::get_user_stats,
        crate::handlers::community::get_community_stats,
        crate::handlers::activities::get_activities,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            StatsQuery,
            CreateUserRequest,
            UpdateUserRequest,
            UserDto,
            CreateEntryRequest,
            EntryDto,
            UserStats,
            CategoryEmission,
            CommunityStats,
            ActivityInfo,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "User profile and carbon goal endpoints"),
        (name = "entries", description = "Activity entry endpoints"),
        (name = "stats", description = "Carbon statistics endpoints"),
        (name = "activities", description = "Emission factor table endpoints"),
    ),
    info(
        title = "EcoGuide API",
        description = "Personal carbon-footprint tracking API - log activities, compute emissions, and follow goal progress",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
