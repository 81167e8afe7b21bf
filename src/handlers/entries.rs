use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use common::{ApiResponse, CreateEntryRequest, EntryDto};
use compute::factors::compute_co2;
use model::entities::{carbon_entry, user};
use model::{Category, RawEntryRecord};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{instrument, warn};

use crate::schemas::{AppState, ErrorResponse};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: code.to_string(),
            success: false,
        }),
    )
}

/// Converts a stored row into its canonical response shape. Returns `None`
/// for rows with an unknown category string, which callers treat as a
/// data problem rather than a request problem.
pub fn entry_dto(model: carbon_entry::Model) -> Option<EntryDto> {
    let id = model.id;
    let raw = RawEntryRecord::try_from(model)
        .map_err(|err| warn!("skipping entry {}: {}", id, err))
        .ok()?;
    let entry = compute::normalize(&raw);

    Some(EntryDto {
        id: entry.id,
        user_id: entry.owner_id,
        category: entry.category.to_string(),
        activity_type: entry.activity_type,
        quantity: entry.quantity,
        co2_kg: entry.co2_kg,
        occurred_on: entry.occurred_on,
        note: entry.note,
    })
}

/// Log a new activity entry
///
/// The emission is computed here, once, from the factor in effect right now,
/// and stored with the entry. Later factor-table changes never rewrite it.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/entries",
    tag = "entries",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    request_body = CreateEntryRequest,
    responses(
        (status = 201, description = "Entry created successfully", body = EntryDto),
        (status = 400, description = "Unknown activity or invalid quantity", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_entry(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EntryDto>>), ApiError> {
    user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await
        .map_err(|err| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                err.to_string(),
            )
        })?
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "USER_NOT_FOUND", "user not found"))?;

    if request.quantity <= Decimal::ZERO {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "INVALID_QUANTITY",
            "quantity must be positive",
        ));
    }

    let category: Category = request.category.parse().map_err(
        |err: model::ParseCategoryError| {
            api_error(StatusCode::BAD_REQUEST, "UNKNOWN_CATEGORY", err.to_string())
        },
    )?;

    let co2 = compute_co2(category, &request.activity_type, request.quantity)
        .map_err(|err| api_error(StatusCode::BAD_REQUEST, "UNKNOWN_ACTIVITY", err.to_string()))?;

    let occurred_on = request
        .occurred_on
        .unwrap_or_else(|| Utc::now().date_naive());

    // New rows are always written with the current-generation columns.
    let new_entry = carbon_entry::ActiveModel {
        user_id: Set(user_id),
        category: Set(category.to_string()),
        activity_type: Set(request.activity_type),
        value: Set(Some(request.quantity)),
        co2_emitted: Set(Some(co2)),
        date: Set(Some(occurred_on)),
        notes: Set(request.note),
        ..Default::default()
    };

    let model = new_entry.insert(&state.db).await.map_err(|err| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "DATABASE_ERROR",
            err.to_string(),
        )
    })?;

    // Aggregates are recomputed per request; only the response cache needs
    // to notice the new entry
    state.cache.invalidate_all();

    let dto = entry_dto(model).ok_or_else(|| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "MALFORMED_ENTRY",
            "stored entry could not be read back",
        )
    })?;

    let response = ApiResponse {
        data: dto,
        message: "Entry created successfully".to_string(),
        success: true,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get all entries for a user, newest first
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/entries",
    tag = "entries",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, description = "Entries retrieved successfully", body = Vec<EntryDto>),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user_entries(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EntryDto>>>, ApiError> {
    user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await
        .map_err(|err| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                err.to_string(),
            )
        })?
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "USER_NOT_FOUND", "user not found"))?;

    let rows = carbon_entry::Entity::find()
        .filter(carbon_entry::Column::UserId.eq(user_id))
        .order_by_desc(carbon_entry::Column::Id)
        .all(&state.db)
        .await
        .map_err(|err| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                err.to_string(),
            )
        })?;

    let entries: Vec<EntryDto> = rows.into_iter().filter_map(entry_dto).collect();

    let response = ApiResponse {
        data: entries,
        message: "Entries retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get a single entry by ID
#[utoipa::path(
    get,
    path = "/api/v1/entries/{entry_id}",
    tag = "entries",
    params(
        ("entry_id" = i32, Path, description = "Entry ID"),
    ),
    responses(
        (status = 200, description = "Entry retrieved successfully", body = EntryDto),
        (status = 404, description = "Entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_entry(
    Path(entry_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<EntryDto>>, ApiError> {
    let model = carbon_entry::Entity::find_by_id(entry_id)
        .one(&state.db)
        .await
        .map_err(|err| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                err.to_string(),
            )
        })?
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "ENTRY_NOT_FOUND", "entry not found"))?;

    let dto = entry_dto(model).ok_or_else(|| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "MALFORMED_ENTRY",
            "stored entry has an unknown category",
        )
    })?;

    let response = ApiResponse {
        data: dto,
        message: "Entry retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Delete an entry
///
/// Entries are immutable once logged; deletion is the only mutation and
/// removes the entry from all future aggregates.
#[utoipa::path(
    delete,
    path = "/api/v1/entries/{entry_id}",
    tag = "entries",
    params(
        ("entry_id" = i32, Path, description = "Entry ID"),
    ),
    responses(
        (status = 200, description = "Entry deleted successfully"),
        (status = 404, description = "Entry not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_entry(
    Path(entry_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let result = carbon_entry::Entity::delete_by_id(entry_id)
        .exec(&state.db)
        .await
        .map_err(|err| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                err.to_string(),
            )
        })?;

    if result.rows_affected == 0 {
        return Err(api_error(
            StatusCode::NOT_FOUND,
            "ENTRY_NOT_FOUND",
            "entry not found",
        ));
    }

    state.cache.invalidate_all();

    let response = ApiResponse {
        data: (),
        message: "Entry deleted successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
