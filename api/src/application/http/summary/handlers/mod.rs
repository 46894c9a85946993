pub mod get_today_recommendations;
pub mod get_today_summary;
