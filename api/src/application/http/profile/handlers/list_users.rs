use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use ginger_core::domain::profile::entities::UserProfile;
use ginger_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListUsersResponse {
    pub data: Vec<UserProfile>,
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "profile",
    summary = "List users",
    responses(
        (status = 200, body = ListUsersResponse)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Response<ListUsersResponse>, ApiError> {
    let profiles = state.service.list_users().await.map_err(ApiError::from)?;

    Ok(Response::OK(ListUsersResponse { data: profiles }))
}
