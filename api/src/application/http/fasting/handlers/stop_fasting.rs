use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use ginger_core::domain::fasting::entities::FastingSession;
use ginger_core::domain::fasting::ports::FastingService;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct StopFastingQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StopFastingResponse {
    pub data: FastingSession,
}

#[utoipa::path(
    post,
    path = "/stop",
    tag = "fasting",
    summary = "Stop fasting",
    description = "Closes the user's open fasting session. 404 when none is open.",
    responses(
        (status = 200, body = StopFastingResponse),
        (status = 404, description = "No open session")
    ),
    params(StopFastingQuery)
)]
pub async fn stop_fasting(
    Query(query): Query<StopFastingQuery>,
    State(state): State<AppState>,
) -> Result<Response<StopFastingResponse>, ApiError> {
    let session = state
        .service
        .stop_fasting(query.user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(StopFastingResponse { data: session }))
}
