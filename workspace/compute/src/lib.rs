//! Carbon accounting module.
//!
//! Pure, synchronous computation over fully materialized entry collections:
//! emission-factor lookup, legacy-record normalization, period aggregation
//! and goal evaluation. The crate performs no I/O and holds no state; the
//! data-access layer decides where records come from (real or demo data) and
//! this crate treats both identically.

pub mod aggregate;
pub mod error;
pub mod factors;
pub mod goal;
pub mod normalize;

use chrono::{Datelike, NaiveDate};
use model::RawEntryRecord;
use rust_decimal::Decimal;
use tracing::instrument;

pub use aggregate::{aggregate, month_window, EmissionSummary};
pub use error::{AccountingError, Result};
pub use factors::{compute_co2, emission_factor, factor_for};
pub use goal::{monthly_budget, progress, GoalProgress, DEFAULT_ANNUAL_GOAL_KG};
pub use normalize::{normalize, normalize_all};

/// Everything a user dashboard needs in one pass: the aggregate over the
/// calendar month containing `today`, plus goal progress for that month.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub summary: EmissionSummary,
    pub goal: GoalProgress,
}

/// Normalizes stored records, aggregates the calendar month of `today`, and
/// evaluates goal progress. `annual_goal_kg = None` means no configured goal
/// and falls back to [`DEFAULT_ANNUAL_GOAL_KG`].
#[instrument(skip(records), fields(num_records = records.len()))]
pub fn dashboard_snapshot(
    records: &[RawEntryRecord],
    annual_goal_kg: Option<Decimal>,
    today: NaiveDate,
) -> Result<DashboardSnapshot> {
    let entries = normalize_all(records);
    // A month taken from a valid NaiveDate is always in range.
    let (start, end) = month_window(today.year(), today.month()).unwrap();
    let summary = aggregate(&entries, start, end);
    let goal = progress(
        summary.windowed,
        annual_goal_kg.unwrap_or(DEFAULT_ANNUAL_GOAL_KG),
    )?;

    Ok(DashboardSnapshot { summary, goal })
}
