pub mod common;
pub mod fasting;
pub mod health;
pub mod meal_ai;
pub mod profile;
pub mod recommendation;
pub mod stats;
pub mod tracking;
