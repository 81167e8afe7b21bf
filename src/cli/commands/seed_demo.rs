use anyhow::Result;
use chrono::{Duration, Utc};
use compute::{compute_co2, dashboard_snapshot, DEFAULT_ANNUAL_GOAL_KG};
use migration::{Migrator, MigratorTrait};
use model::entities::{carbon_entry, user};
use model::Category;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, Database, EntityTrait, QueryFilter, Set};
use tracing::info;

use crate::helpers::stats::fetch_raw_records;

/// Seed a demo user with sample activity entries
pub async fn run(database_url: &str) -> Result<()> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;

    if let Some(existing) = user::Entity::find()
        .filter(user::Column::Username.eq("demo"))
        .one(&db)
        .await?
    {
        info!("Demo user already exists (id {}), nothing to do", existing.id);
        return Ok(());
    }

    let demo = user::ActiveModel {
        username: Set("demo".to_string()),
        carbon_goal_kg: Set(Some(DEFAULT_ANNUAL_GOAL_KG)),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let today = Utc::now().date_naive();
    let samples: [(Category, &str, Decimal, i64, Option<&str>); 5] = [
        (
            Category::Transportation,
            "car_gasoline_mile",
            Decimal::new(12, 0),
            1,
            Some("commute"),
        ),
        (
            Category::Energy,
            "electricity_kwh",
            Decimal::new(150, 0),
            3,
            Some("monthly bill"),
        ),
        (Category::Food, "beef_meal", Decimal::new(1, 0), 2, None),
        (Category::Waste, "recycling_kg", Decimal::new(2, 0), 5, None),
        (
            Category::Consumption,
            "clothing_item",
            Decimal::new(1, 0),
            8,
            Some("t-shirt"),
        ),
    ];

    for (category, activity_type, quantity, days_ago, note) in samples {
        let co2 = compute_co2(category, activity_type, quantity)?;
        carbon_entry::ActiveModel {
            user_id: Set(demo.id),
            category: Set(category.to_string()),
            activity_type: Set(activity_type.to_string()),
            value: Set(Some(quantity)),
            co2_emitted: Set(Some(co2)),
            date: Set(Some(today - Duration::days(days_ago))),
            notes: Set(note.map(|n| n.to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }

    // One row in the pre-rename column layout, so a demo database also
    // exercises the read-time normalizer.
    let legacy_quantity = Decimal::new(3, 0);
    let legacy_co2 = compute_co2(Category::Transportation, "bus_mile", legacy_quantity)?;
    carbon_entry::ActiveModel {
        user_id: Set(demo.id),
        category: Set(Category::Transportation.to_string()),
        activity_type: Set("bus_mile".to_string()),
        amount: Set(Some(legacy_quantity)),
        co2_kg: Set(Some(legacy_co2)),
        date_recorded: Set(Some(today - Duration::days(10))),
        description: Set(Some("errand".to_string())),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let records = fetch_raw_records(&db, demo.id).await?;
    let snapshot = dashboard_snapshot(&records, demo.carbon_goal_kg, today)?;
    info!(
        "Seeded demo user {} with {} entries: {} kg CO2 this month, {}% of monthly goal",
        demo.id,
        records.len(),
        snapshot.summary.windowed,
        snapshot.goal.percent.round_dp(1),
    );

    Ok(())
}
