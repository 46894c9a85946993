pub mod get_calories_by_hour;
pub mod get_daily_totals;
pub mod get_weight_series;
