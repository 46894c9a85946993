use super::handlers::get_fasting_status::{__path_get_fasting_status, get_fasting_status};
use super::handlers::start_fasting::{__path_start_fasting, start_fasting};
use super::handlers::stop_fasting::{__path_stop_fasting, stop_fasting};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(start_fasting, stop_fasting, get_fasting_status))]
pub struct FastingApiDoc;

pub fn fasting_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/fasting/start"), post(start_fasting))
        .route(&format!("{root_path}/fasting/stop"), post(stop_fasting))
        .route(
            &format!("{root_path}/fasting/status"),
            get(get_fasting_status),
        )
}
