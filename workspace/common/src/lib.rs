//! Common transport-layer types shared between the backend and its clients.
//! These structs mirror the backend handlers' request/response payloads so
//! clients can deserialize API responses without duplicating shapes.

mod stats;

pub use stats::{ActivityInfo, CategoryEmission, CommunityStats, UserStats};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by all endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

// ===================== Users =====================

/// Request body for creating a new user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateUserRequest {
    pub username: String,
    /// Annual CO2 budget in kg; must be positive when supplied.
    pub carbon_goal_kg: Option<Decimal>,
}

/// Request body for updating a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    /// Annual CO2 budget in kg; must be positive when supplied.
    pub carbon_goal_kg: Option<Decimal>,
}

/// User response model.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub carbon_goal_kg: Option<Decimal>,
}

// ===================== Entries =====================

/// Request body for logging an activity entry.
///
/// The server computes the emission from the static factor table at
/// creation time; clients never submit CO2 amounts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateEntryRequest {
    /// Category name, e.g. `energy`.
    pub category: String,
    /// Activity key scoped to the category, e.g. `electricity_kwh`.
    pub activity_type: String,
    /// Quantity in the unit implied by the activity; must be positive.
    pub quantity: Decimal,
    /// Defaults to today when omitted.
    pub occurred_on: Option<NaiveDate>,
    pub note: Option<String>,
}

/// Activity entry response model, always in canonical (normalized) shape
/// regardless of which schema generation the row was stored with.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct EntryDto {
    pub id: i32,
    pub user_id: i32,
    pub category: String,
    pub activity_type: String,
    pub quantity: Decimal,
    pub co2_kg: Decimal,
    pub occurred_on: NaiveDate,
    pub note: Option<String>,
}
