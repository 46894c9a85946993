use super::handlers::log_meal::{__path_log_meal, log_meal};
use super::handlers::parse_meal::{__path_parse_meal, parse_meal};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(parse_meal, log_meal))]
pub struct MealAiApiDoc;

pub fn meal_ai_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/ai/parse-meal"), post(parse_meal))
        .route(&format!("{root_path}/ai/log-meal"), post(log_meal))
}
