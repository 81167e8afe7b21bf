pub mod activities;
pub mod community;
pub mod entries;
pub mod health;
pub mod stats;
pub mod users;
