//! Entry normalizer: folds both generations of stored field names into the
//! canonical [`CarbonEntry`] shape.
//!
//! The stored schema was renamed in place (`amount` -> `value`, `co2_kg` ->
//! `co2_emitted`, `date_recorded` -> `date`, `description` -> `notes`)
//! without migrating old rows. Normalization is a total function: a record
//! missing both generations of a field degrades to a zeroed field rather
//! than failing, so one corrupt historical row can never take down a whole
//! dashboard aggregate.

use model::{CarbonEntry, RawEntryRecord};
use rust_decimal::Decimal;

/// Produces the canonical entry for a stored record.
///
/// Resolution order per field: current name first, legacy name second,
/// zero/epoch default last.
pub fn normalize(raw: &RawEntryRecord) -> CarbonEntry {
    CarbonEntry {
        id: raw.id,
        owner_id: raw.owner_id,
        category: raw.category,
        activity_type: raw.activity_type.clone(),
        quantity: raw.value.or(raw.amount).unwrap_or(Decimal::ZERO),
        co2_kg: raw.co2_emitted.or(raw.co2_kg).unwrap_or(Decimal::ZERO),
        occurred_on: raw.date.or(raw.date_recorded).unwrap_or_default(),
        note: raw.notes.clone().or_else(|| raw.description.clone()),
    }
}

/// Normalizes a whole stored collection.
pub fn normalize_all(raws: &[RawEntryRecord]) -> Vec<CarbonEntry> {
    raws.iter().map(normalize).collect()
}
