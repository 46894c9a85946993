use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::tracking::validators::AddWeightValidator;
use axum::extract::State;
use ginger_core::domain::tracking::entities::WeightLog;
use ginger_core::domain::tracking::ports::TrackingService;
use ginger_core::domain::tracking::value_objects::CreateWeightLogInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddWeightResponse {
    pub data: WeightLog,
}

#[utoipa::path(
    post,
    path = "/weight",
    tag = "tracking",
    summary = "Log weight",
    description = "Appends a weight entry and moves the profile's current weight to the new value.",
    responses(
        (status = 201, body = AddWeightResponse),
        (status = 404, description = "Unknown user")
    ),
    request_body = AddWeightValidator
)]
pub async fn add_weight(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddWeightValidator>,
) -> Result<Response<AddWeightResponse>, ApiError> {
    let log = state
        .service
        .add_weight(CreateWeightLogInput {
            user_id: payload.user_id,
            weight_kg: payload.weight_kg,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddWeightResponse { data: log }))
}
