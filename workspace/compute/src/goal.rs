//! Goal evaluation: compares a monthly emission sum against a prorated
//! annual budget.

use rust_decimal::Decimal;
use tracing::instrument;

use crate::error::{AccountingError, Result};

/// Baseline annual CO2 budget in kilograms, used when a user has not
/// configured a goal. Absence of a goal is not a goal of zero.
pub const DEFAULT_ANNUAL_GOAL_KG: Decimal = Decimal::from_parts(2000, 0, 0, false, 0);

/// Progress of a monthly emission sum against the prorated annual goal.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    /// Percentage of the monthly budget consumed, clamped to [0, 100] so
    /// progress bars never overflow.
    pub percent: Decimal,
    /// Budget left this month, floored at zero.
    pub remaining_kg: Decimal,
    /// Whether the raw (unclamped) ratio reached the budget. Equality
    /// counts as exceeded.
    pub exceeded: bool,
}

/// The monthly budget derived from an annual goal. Recomputed on demand,
/// never stored.
pub fn monthly_budget(annual_goal_kg: Decimal) -> Result<Decimal> {
    if annual_goal_kg <= Decimal::ZERO {
        return Err(AccountingError::InvalidGoal(annual_goal_kg));
    }
    Ok(annual_goal_kg / Decimal::new(12, 0))
}

/// Evaluates goal progress for a windowed emission sum.
///
/// Fails with [`AccountingError::InvalidGoal`] for a non-positive annual
/// goal; callers substitute [`DEFAULT_ANNUAL_GOAL_KG`] when no goal is
/// configured.
#[instrument]
pub fn progress(windowed_co2: Decimal, annual_goal_kg: Decimal) -> Result<GoalProgress> {
    let budget = monthly_budget(annual_goal_kg)?;
    let raw_percent = windowed_co2 / budget * Decimal::ONE_HUNDRED;

    Ok(GoalProgress {
        percent: raw_percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
        remaining_kg: (budget - windowed_co2).max(Decimal::ZERO),
        exceeded: windowed_co2 >= budget,
    })
}
