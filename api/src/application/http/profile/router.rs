use super::handlers::create_user::{__path_create_user, create_user};
use super::handlers::get_user::{__path_get_user, get_user};
use super::handlers::list_users::{__path_list_users, list_users};
use super::handlers::onboarding::{__path_onboarding, onboarding};
use super::handlers::update_goals::{__path_update_goals, update_goals};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_user, list_users, get_user, onboarding, update_goals))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/users"),
            post(create_user).get(list_users),
        )
        .route(&format!("{root_path}/users/{{user_id}}"), get(get_user))
        .route(
            &format!("{root_path}/users/{{user_id}}/onboarding"),
            post(onboarding),
        )
        .route(&format!("{root_path}/goals"), post(update_goals))
}
