use crate::application::http::meal_ai::validators::ParseMealValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use ginger_core::domain::meal_ai::ports::MealAiService;
use ginger_core::domain::meal_ai::value_objects::MealBreakdown;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ParseMealResponse {
    pub data: MealBreakdown,
}

#[utoipa::path(
    post,
    path = "/parse-meal",
    tag = "meal_ai",
    summary = "Parse meal text",
    description = "Turns free-text meal descriptions into a structured nutrition estimate. Nothing is stored.",
    responses(
        (status = 200, body = ParseMealResponse),
        (status = 502, description = "The model failed or returned unusable output")
    ),
    request_body = ParseMealValidator
)]
pub async fn parse_meal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ParseMealValidator>,
) -> Result<Response<ParseMealResponse>, ApiError> {
    let breakdown = state
        .service
        .parse_meal(payload.text)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ParseMealResponse { data: breakdown }))
}
