pub mod fasting_sessions;
pub mod food_logs;
pub mod user_profiles;
pub mod water_logs;
pub mod weight_logs;
