pub mod food_log_repository;
pub mod water_log_repository;
pub mod weight_log_repository;
