use chrono::NaiveDate;
use common::{CategoryEmission, UserStats};
use compute::{aggregate, normalize_all, progress, AccountingError, DEFAULT_ANNUAL_GOAL_KG};
use model::entities::carbon_entry;
use model::RawEntryRecord;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use tracing::warn;

/// Fetches all of a user's stored entries as raw records, newest first.
///
/// A row whose category string is not one of the known categories is skipped
/// with a warning instead of failing the whole read; the accounting layer
/// only ever sees well-formed categories.
pub async fn fetch_raw_records(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Vec<RawEntryRecord>, DbErr> {
    let rows = carbon_entry::Entity::find()
        .filter(carbon_entry::Column::UserId.eq(user_id))
        .order_by_desc(carbon_entry::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let id = row.id;
            RawEntryRecord::try_from(row)
                .map_err(|err| warn!("skipping entry {}: {}", id, err))
                .ok()
        })
        .collect())
}

/// Builds the per-user dashboard statistics for one window: normalize the
/// stored records, aggregate, and evaluate goal progress.
pub fn build_user_stats(
    records: &[RawEntryRecord],
    annual_goal_kg: Option<Decimal>,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Result<UserStats, AccountingError> {
    let entries = normalize_all(records);
    let summary = aggregate(&entries, window_start, window_end);
    let goal = progress(
        summary.windowed,
        annual_goal_kg.unwrap_or(DEFAULT_ANNUAL_GOAL_KG),
    )?;

    let mut by_category: Vec<CategoryEmission> = summary
        .by_category
        .iter()
        .map(|(category, co2)| CategoryEmission {
            category: category.to_string(),
            co2_kg: *co2,
        })
        .collect();
    // Heaviest first; map iteration order is not meaningful
    by_category.sort_by(|a, b| b.co2_kg.cmp(&a.co2_kg));

    Ok(UserStats {
        total_co2: summary.total,
        monthly_co2: summary.windowed,
        goal_percent: goal.percent,
        remaining_kg: goal.remaining_kg,
        goal_exceeded: goal.exceeded,
        top_category: summary.top_category().map(|(category, _)| category.to_string()),
        by_category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use compute::month_window;
    use model::Category;

    #[test]
    fn test_legacy_and_current_records_build_identical_stats() {
        let current = RawEntryRecord {
            id: 1,
            owner_id: 1,
            category: Category::Energy,
            activity_type: "electricity_kwh".to_string(),
            value: Some(Decimal::new(150, 0)),
            co2_emitted: Some(Decimal::new(6795, 2)),
            date: NaiveDate::from_ymd_opt(2025, 3, 15),
            ..Default::default()
        };
        let legacy = RawEntryRecord {
            value: None,
            co2_emitted: None,
            date: None,
            amount: Some(Decimal::new(150, 0)),
            co2_kg: Some(Decimal::new(6795, 2)),
            date_recorded: NaiveDate::from_ymd_opt(2025, 3, 15),
            ..current.clone()
        };

        let (start, end) = month_window(2025, 3).unwrap();
        let from_current = build_user_stats(&[current], None, start, end).unwrap();
        let from_legacy = build_user_stats(&[legacy], None, start, end).unwrap();
        assert_eq!(from_current, from_legacy);
        assert_eq!(from_current.monthly_co2, Decimal::new(6795, 2));
    }

    #[test]
    fn test_empty_records_build_zeroed_stats() {
        let (start, end) = month_window(2025, 3).unwrap();
        let stats = build_user_stats(&[], None, start, end).unwrap();
        assert_eq!(stats.total_co2, Decimal::ZERO);
        assert_eq!(stats.monthly_co2, Decimal::ZERO);
        assert_eq!(stats.top_category, None);
        assert!(stats.by_category.is_empty());
        assert!(!stats.goal_exceeded);
    }
}
