use super::handlers::get_today_recommendations::{
    __path_get_today_recommendations, get_today_recommendations,
};
use super::handlers::get_today_summary::{__path_get_today_summary, get_today_summary};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_today_summary, get_today_recommendations))]
pub struct SummaryApiDoc;

pub fn summary_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/summary/today"),
            get(get_today_summary),
        )
        .route(
            &format!("{root_path}/recommendations/today"),
            get(get_today_recommendations),
        )
}
