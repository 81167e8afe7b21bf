use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Emission sum for one category over the queried month.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryEmission {
    pub category: String,
    pub co2_kg: Decimal,
}

/// Per-user dashboard statistics for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserStats {
    /// All-time emission sum in kg.
    pub total_co2: Decimal,
    /// Emission sum for the queried month in kg.
    pub monthly_co2: Decimal,
    /// Percent of the prorated monthly budget consumed, clamped to [0, 100].
    pub goal_percent: Decimal,
    /// Budget left this month in kg, floored at zero.
    pub remaining_kg: Decimal,
    /// Whether the month's emissions reached the monthly budget.
    pub goal_exceeded: bool,
    /// Heaviest category of the month, if any entries were logged.
    pub top_category: Option<String>,
    /// Monthly per-category breakdown, heaviest first.
    pub by_category: Vec<CategoryEmission>,
}

/// Platform-wide statistics across all users.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CommunityStats {
    pub total_users: u64,
    /// All-time emission sum across every user, in kg.
    pub total_co2_tracked: Decimal,
    /// Emission sum for the current calendar month, in kg.
    pub co2_this_month: Decimal,
    /// Users with at least one entry dated in the last 30 days.
    pub active_users: u64,
    /// Total number of logged entries.
    pub total_activities: u64,
    /// Trees needed to absorb this month's emissions (one tree absorbs
    /// roughly 22 kg CO2 per year, ~1.83 kg per month).
    pub trees_equivalent: i64,
}

/// One row of the emission factor table, exposed so clients can build the
/// activity logging form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ActivityInfo {
    /// Wire key, e.g. `car_gasoline_mile`.
    pub key: String,
    pub category: String,
    /// Unit label for the quantity field, e.g. `miles`.
    pub unit: String,
    /// kg CO2 per unit.
    pub factor: Decimal,
}
