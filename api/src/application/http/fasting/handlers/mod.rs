pub mod get_fasting_status;
pub mod start_fasting;
pub mod stop_fasting;
