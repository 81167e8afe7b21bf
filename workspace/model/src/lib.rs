pub mod activity;
pub mod entities;
pub mod entry;

pub use activity::{Activity, Category, ParseActivityError, ParseCategoryError};
pub use entry::{CarbonEntry, RawEntryRecord};
