use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::{ApiResponse, CreateUserRequest, UpdateUserRequest, UserDto};
use model::entities::user;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use tracing::instrument;

use crate::schemas::AppState;

pub fn user_dto(model: user::Model) -> UserDto {
    UserDto {
        id: model.id,
        username: model.username,
        carbon_goal_kg: model.carbon_goal_kg,
    }
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = UserDto),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), StatusCode> {
    // A goal of zero or less would break budget proration later; absence of
    // a goal is fine and falls back to the default at read time.
    if matches!(request.carbon_goal_kg, Some(goal) if goal <= Decimal::ZERO) {
        return Err(StatusCode::BAD_REQUEST);
    }

    let new_user = user::ActiveModel {
        username: Set(request.username),
        carbon_goal_kg: Set(request.carbon_goal_kg),
        ..Default::default()
    };

    let user_model = new_user
        .insert(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let response = ApiResponse {
        data: user_dto(user_model),
        message: "User created successfully".to_string(),
        success: true,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get all users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserDto>>>, StatusCode> {
    let users = user::Entity::find()
        .all(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let response = ApiResponse {
        data: users.into_iter().map(user_dto).collect(),
        message: "Users retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserDto),
        (status = 404, description = "User not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UserDto>>, StatusCode> {
    let user_model = user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let response = ApiResponse {
        data: user_dto(user_model),
        message: "User retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Update a user's profile or annual carbon goal
#[utoipa::path(
    put,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = UserDto),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 404, description = "User not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, StatusCode> {
    if matches!(request.carbon_goal_kg, Some(goal) if goal <= Decimal::ZERO) {
        return Err(StatusCode::BAD_REQUEST);
    }

    let user_model = user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    let mut active_user = user_model.into_active_model();
    if let Some(username) = request.username {
        active_user.username = Set(username);
    }
    if let Some(goal) = request.carbon_goal_kg {
        active_user.carbon_goal_kg = Set(Some(goal));
    }

    let updated = active_user
        .update(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    // Goal changes shift every cached progress figure
    state.cache.invalidate_all();

    let response = ApiResponse {
        data: user_dto(updated),
        message: "User updated successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Delete a user and all their entries
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "User deleted successfully"),
        (status = 404, description = "User not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, StatusCode> {
    let result = user::Entity::delete_by_id(user_id)
        .exec(&state.db)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if result.rows_affected == 0 {
        return Err(StatusCode::NOT_FOUND);
    }

    state.cache.invalidate_all();

    let response = ApiResponse {
        data: (),
        message: "User deleted successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
