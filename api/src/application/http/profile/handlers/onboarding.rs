use crate::application::http::profile::validators::OnboardingValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ginger_core::domain::profile::entities::UserProfile;
use ginger_core::domain::profile::ports::ProfileService;
use ginger_core::domain::profile::value_objects::OnboardingInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OnboardingResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    post,
    path = "/users/{user_id}/onboarding",
    tag = "profile",
    summary = "Complete onboarding",
    description = "Stores body metrics and recomputes every derived daily target (calories, water, protein, sugar).",
    responses(
        (status = 200, body = OnboardingResponse),
        (status = 404, description = "Unknown user")
    ),
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
    request_body = OnboardingValidator
)]
pub async fn onboarding(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<OnboardingValidator>,
) -> Result<Response<OnboardingResponse>, ApiError> {
    let profile = state
        .service
        .onboarding(
            user_id,
            OnboardingInput {
                age: payload.age,
                height_cm: payload.height_cm,
                weight_kg: payload.weight_kg,
                sex: payload.sex,
                activity_level: payload.activity_level,
                goal: payload.goal,
                goal_pace: payload.goal_pace,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(OnboardingResponse { data: profile }))
}
