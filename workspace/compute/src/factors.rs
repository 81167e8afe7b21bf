//! Emission factor table: kilograms of CO2-equivalent per unit of activity.
//!
//! The table is a compile-time constant. Entries snapshot the factor in
//! effect when they are logged, so changing a factor here never rewrites
//! historical `co2_kg` values.

use model::{Activity, Category};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::error::{AccountingError, Result};

/// Emission factor for a typed activity, in kg CO2 per unit.
///
/// Infallible: the `Activity` enum is closed, so every variant has a factor.
pub fn emission_factor(activity: Activity) -> Decimal {
    match activity {
        Activity::CarGasolineMile => Decimal::new(411, 3),
        Activity::CarElectricMile => Decimal::new(123, 3),
        Activity::BusMile => Decimal::new(105, 3),
        Activity::TrainMile => Decimal::new(62, 3),
        Activity::FlightDomesticMile => Decimal::new(223, 3),
        Activity::FlightInternationalMile => Decimal::new(298, 3),
        Activity::ElectricityKwh => Decimal::new(453, 3),
        Activity::NaturalGasTherm => Decimal::new(53, 1),
        Activity::HeatingOilGallon => Decimal::new(1015, 2),
        Activity::BeefMeal => Decimal::new(661, 2),
        Activity::PorkMeal => Decimal::new(245, 2),
        Activity::ChickenMeal => Decimal::new(157, 2),
        Activity::FishMeal => Decimal::new(124, 2),
        Activity::VegetarianMeal => Decimal::new(38, 2),
        Activity::VeganMeal => Decimal::new(16, 2),
        Activity::LandfillKg => Decimal::new(5, 1),
        Activity::RecyclingKg => Decimal::new(1, 1),
        Activity::CompostKg => Decimal::new(5, 2),
        Activity::ClothingItem => Decimal::new(85, 1),
        Activity::ElectronicsItem => Decimal::new(850, 1),
        Activity::BookItem => Decimal::new(271, 2),
    }
}

/// Looks up the emission factor for an untyped activity key scoped to a
/// category, as submitted through the API at entry-creation time.
///
/// Fails with [`AccountingError::UnknownActivity`] if the key is unknown or
/// belongs to a different category.
pub fn factor_for(category: Category, activity_type: &str) -> Result<Decimal> {
    let activity: Activity =
        activity_type
            .parse()
            .map_err(|_| AccountingError::UnknownActivity {
                category,
                activity_type: activity_type.to_string(),
            })?;

    if activity.category() != category {
        return Err(AccountingError::UnknownActivity {
            category,
            activity_type: activity_type.to_string(),
        });
    }

    Ok(emission_factor(activity))
}

/// Computes the emission for a logged quantity: `quantity * factor`, exact
/// decimal arithmetic, no rounding.
#[instrument]
pub fn compute_co2(category: Category, activity_type: &str, quantity: Decimal) -> Result<Decimal> {
    Ok(quantity * factor_for(category, activity_type)?)
}
