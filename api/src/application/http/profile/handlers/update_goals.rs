use crate::application::http::profile::validators::UpdateGoalsValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use ginger_core::domain::profile::entities::UserProfile;
use ginger_core::domain::profile::ports::ProfileService;
use ginger_core::domain::profile::value_objects::UpdateGoalsInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateGoalsResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    post,
    path = "/goals",
    tag = "profile",
    summary = "Update goals",
    description = "Overrides individual targets. Absent fields keep their current values; derived targets are not recomputed here.",
    responses(
        (status = 200, body = UpdateGoalsResponse),
        (status = 404, description = "Unknown user")
    ),
    request_body = UpdateGoalsValidator
)]
pub async fn update_goals(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateGoalsValidator>,
) -> Result<Response<UpdateGoalsResponse>, ApiError> {
    let profile = state
        .service
        .update_goals(UpdateGoalsInput {
            user_id: payload.user_id,
            goal: payload.goal,
            calorie_target_kcal: payload.calorie_target_kcal,
            protein_target_g: payload.protein_target_g,
            sugar_limit_g: payload.sugar_limit_g,
            water_goal_ml: payload.water_goal_ml,
            fasting_default_hours: payload.fasting_default_hours,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateGoalsResponse { data: profile }))
}
