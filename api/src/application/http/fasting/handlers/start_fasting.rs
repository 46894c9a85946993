use crate::application::http::fasting::validators::StartFastingValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use ginger_core::domain::fasting::entities::FastingSession;
use ginger_core::domain::fasting::ports::FastingService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StartFastingResponse {
    pub data: FastingSession,
}

#[utoipa::path(
    post,
    path = "/start",
    tag = "fasting",
    summary = "Start fasting",
    description = "Opens a fasting session. A user can have at most one open session; a second start returns 409.",
    responses(
        (status = 201, body = StartFastingResponse),
        (status = 404, description = "Unknown user"),
        (status = 409, description = "A session is already open")
    ),
    request_body = StartFastingValidator
)]
pub async fn start_fasting(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<StartFastingValidator>,
) -> Result<Response<StartFastingResponse>, ApiError> {
    let session = state
        .service
        .start_fasting(payload.user_id, payload.protocol)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(StartFastingResponse { data: session }))
}
