pub mod log_meal;
pub mod parse_meal;
