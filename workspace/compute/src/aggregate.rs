//! Period aggregation over canonical entries.
//!
//! Aggregates are recomputed from the full entry collection on every call.
//! Per-user entry volumes are tens to low hundreds, so there is no cached or
//! incremental aggregate to invalidate.

use chrono::NaiveDate;
use model::{CarbonEntry, Category};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::instrument;

/// Summed emissions over an entry collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmissionSummary {
    /// Sum of `co2_kg` over all entries regardless of date.
    pub total: Decimal,
    /// Sum of `co2_kg` over entries inside the window.
    pub windowed: Decimal,
    /// Per-category sums over the windowed population.
    pub by_category: HashMap<Category, Decimal>,
}

impl EmissionSummary {
    /// The windowed category with the largest emission, if any entries fell
    /// inside the window. Ties are broken arbitrarily.
    pub fn top_category(&self) -> Option<(Category, Decimal)> {
        self.by_category
            .iter()
            .max_by(|a, b| a.1.cmp(b.1))
            .map(|(category, co2)| (*category, *co2))
    }
}

/// Computes the all-time total, the windowed sum over the half-open interval
/// `[window_start, window_end)`, and the per-category breakdown of the
/// windowed population.
///
/// Pure: never mutates its input, never fails. An empty collection yields
/// zeros and an empty map.
#[instrument(skip(entries), fields(num_entries = entries.len()))]
pub fn aggregate(
    entries: &[CarbonEntry],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> EmissionSummary {
    let mut summary = EmissionSummary::default();

    for entry in entries {
        summary.total += entry.co2_kg;
        if entry.occurred_on >= window_start && entry.occurred_on < window_end {
            summary.windowed += entry.co2_kg;
            *summary
                .by_category
                .entry(entry.category)
                .or_insert(Decimal::ZERO) += entry.co2_kg;
        }
    }

    summary
}

/// The half-open window `[first of month, first of next month)` covering one
/// calendar month. Returns `None` for an out-of-range month number.
pub fn month_window(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, end))
}
