use super::handlers::add_food::{__path_add_food, add_food};
use super::handlers::add_water::{__path_add_water, add_water};
use super::handlers::add_weight::{__path_add_weight, add_weight};
use super::handlers::update_water_goal::{__path_update_water_goal, update_water_goal};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(add_food, add_water, add_weight, update_water_goal))]
pub struct TrackingApiDoc;

pub fn tracking_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/food"), post(add_food))
        .route(&format!("{root_path}/water"), post(add_water))
        .route(&format!("{root_path}/water/goal"), post(update_water_goal))
        .route(&format!("{root_path}/weight"), post(add_weight))
}
