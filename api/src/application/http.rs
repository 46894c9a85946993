pub mod fasting;
pub mod health;
pub mod meal_ai;
pub mod profile;
pub mod server;
pub mod stats;
pub mod summary;
pub mod tracking;
