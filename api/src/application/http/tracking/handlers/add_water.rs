use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::tracking::validators::AddWaterValidator;
use axum::extract::State;
use ginger_core::domain::tracking::entities::WaterLog;
use ginger_core::domain::tracking::ports::TrackingService;
use ginger_core::domain::tracking::value_objects::CreateWaterLogInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddWaterResponse {
    pub data: WaterLog,
}

#[utoipa::path(
    post,
    path = "/water",
    tag = "tracking",
    summary = "Log water",
    description = "Appends a water intake entry timestamped now.",
    responses(
        (status = 201, body = AddWaterResponse),
        (status = 404, description = "Unknown user")
    ),
    request_body = AddWaterValidator
)]
pub async fn add_water(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddWaterValidator>,
) -> Result<Response<AddWaterResponse>, ApiError> {
    let log = state
        .service
        .add_water(CreateWaterLogInput {
            user_id: payload.user_id,
            ml: payload.ml,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddWaterResponse { data: log }))
}
