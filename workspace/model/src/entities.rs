pub mod carbon_entry;
pub mod user;
