use super::handlers::get_calories_by_hour::{__path_get_calories_by_hour, get_calories_by_hour};
use super::handlers::get_daily_totals::{__path_get_daily_totals, get_daily_totals};
use super::handlers::get_weight_series::{__path_get_weight_series, get_weight_series};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_daily_totals, get_calories_by_hour, get_weight_series))]
pub struct StatsApiDoc;

pub fn stats_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/stats/daily-totals"),
            get(get_daily_totals),
        )
        .route(
            &format!("{root_path}/stats/calories-by-hour"),
            get(get_calories_by_hour),
        )
        .route(&format!("{root_path}/stats/weight"), get(get_weight_series))
}
