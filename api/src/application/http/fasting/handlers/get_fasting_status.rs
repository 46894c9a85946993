use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use ginger_core::domain::fasting::ports::FastingService;
use ginger_core::domain::fasting::value_objects::FastingStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct FastingStatusQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFastingStatusResponse {
    pub data: FastingStatus,
}

#[utoipa::path(
    get,
    path = "/status",
    tag = "fasting",
    summary = "Fasting status",
    description = "Current fasting state with elapsed minutes and a stage suggestion.",
    responses(
        (status = 200, body = GetFastingStatusResponse),
        (status = 404, description = "Unknown user")
    ),
    params(FastingStatusQuery)
)]
pub async fn get_fasting_status(
    Query(query): Query<FastingStatusQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetFastingStatusResponse>, ApiError> {
    let status = state
        .service
        .fasting_status(query.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFastingStatusResponse { data: status }))
}
