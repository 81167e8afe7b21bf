use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::activity::{Category, ParseCategoryError};
use crate::entities::carbon_entry;

/// The single canonical in-memory shape of an activity entry.
///
/// All downstream computation works on this type; how the record was stored
/// (which generation of column names it used) is invisible here.
///
/// `co2_kg` is computed once at entry creation from the emission factor in
/// effect at that moment and stored. It is never recomputed on read, so
/// historical entries are immutable snapshots even if the factor table
/// changes later.
#[derive(Debug, Clone, PartialEq)]
pub struct CarbonEntry {
    pub id: i32,
    pub owner_id: i32,
    pub category: Category,
    /// Activity key, validated against the factor table at creation time and
    /// treated as opaque afterwards.
    pub activity_type: String,
    /// Quantity in the unit implied by `activity_type`.
    pub quantity: Decimal,
    /// Emission in kilograms of CO2.
    pub co2_kg: Decimal,
    pub occurred_on: NaiveDate,
    pub note: Option<String>,
}

/// A stored entry record as it exists in the database, carrying both
/// generations of column names.
///
/// The schema was renamed in place without a data migration: old rows only
/// populate `amount`/`co2_kg`/`date_recorded`/`description`, newer rows only
/// `value`/`co2_emitted`/`date`/`notes`. The normalizer in the compute crate
/// reconciles the two; nothing else should look at these paired fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawEntryRecord {
    pub id: i32,
    pub owner_id: i32,
    pub category: Category,
    pub activity_type: String,
    /// Current-generation quantity column.
    pub value: Option<Decimal>,
    /// Legacy quantity column.
    pub amount: Option<Decimal>,
    /// Current-generation emission column.
    pub co2_emitted: Option<Decimal>,
    /// Legacy emission column.
    pub co2_kg: Option<Decimal>,
    /// Current-generation date column.
    pub date: Option<NaiveDate>,
    /// Legacy date column.
    pub date_recorded: Option<NaiveDate>,
    /// Current-generation annotation column.
    pub notes: Option<String>,
    /// Legacy annotation column.
    pub description: Option<String>,
}

impl TryFrom<carbon_entry::Model> for RawEntryRecord {
    type Error = ParseCategoryError;

    /// Converts a database row into a raw record. Fails only when the stored
    /// category string is not one of the known categories; that is a
    /// data-access-layer concern and callers decide whether to skip the row.
    fn try_from(model: carbon_entry::Model) -> Result<Self, Self::Error> {
        Ok(RawEntryRecord {
            id: model.id,
            owner_id: model.user_id,
            category: model.category.parse()?,
            activity_type: model.activity_type,
            value: model.value,
            amount: model.amount,
            co2_emitted: model.co2_emitted,
            co2_kg: model.co2_kg,
            date: model.date,
            date_recorded: model.date_recorded,
            notes: model.notes,
            description: model.description,
        })
    }
}
