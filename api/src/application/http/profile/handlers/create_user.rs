use crate::application::http::profile::validators::CreateUserValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use ginger_core::domain::profile::entities::UserProfile;
use ginger_core::domain::profile::ports::ProfileService;
use ginger_core::domain::profile::value_objects::CreateUserInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateUserResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "profile",
    summary = "Create user",
    description = "Creates a new user profile. Body metrics are optional at this point and can be supplied later via onboarding.",
    responses(
        (status = 201, body = CreateUserResponse)
    ),
    request_body = CreateUserValidator
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateUserValidator>,
) -> Result<Response<CreateUserResponse>, ApiError> {
    let profile = state
        .service
        .create_user(CreateUserInput {
            name: payload.name,
            age: payload.age,
            height_cm: payload.height_cm,
            weight_kg: payload.weight_kg,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateUserResponse { data: profile }))
}
