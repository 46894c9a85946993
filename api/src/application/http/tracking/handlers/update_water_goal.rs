use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::tracking::validators::UpdateWaterGoalValidator;
use axum::extract::State;
use ginger_core::domain::profile::entities::UserProfile;
use ginger_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateWaterGoalResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    post,
    path = "/water/goal",
    tag = "tracking",
    summary = "Update water goal",
    responses(
        (status = 200, body = UpdateWaterGoalResponse),
        (status = 404, description = "Unknown user")
    ),
    request_body = UpdateWaterGoalValidator
)]
pub async fn update_water_goal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateWaterGoalValidator>,
) -> Result<Response<UpdateWaterGoalResponse>, ApiError> {
    let profile = state
        .service
        .update_water_goal(payload.user_id, payload.water_goal_ml)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateWaterGoalResponse { data: profile }))
}
