use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ginger_core::domain::profile::entities::UserProfile;
use ginger_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUserResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "profile",
    summary = "Get user",
    responses(
        (status = 200, body = GetUserResponse),
        (status = 404, description = "Unknown user")
    ),
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    )
)]
pub async fn get_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetUserResponse>, ApiError> {
    let profile = state
        .service
        .get_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUserResponse { data: profile }))
}
