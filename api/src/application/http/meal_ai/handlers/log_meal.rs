use crate::application::http::meal_ai::validators::LogMealValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use ginger_core::domain::meal_ai::ports::MealAiService;
use ginger_core::domain::meal_ai::value_objects::LoggedMeal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LogMealResponse {
    pub data: LoggedMeal,
}

#[utoipa::path(
    post,
    path = "/log-meal",
    tag = "meal_ai",
    summary = "Parse and log meal",
    description = "Parses the text and appends a food log entry with the estimated totals.",
    responses(
        (status = 201, body = LogMealResponse),
        (status = 404, description = "Unknown user"),
        (status = 502, description = "The model failed or returned unusable output")
    ),
    request_body = LogMealValidator
)]
pub async fn log_meal(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LogMealValidator>,
) -> Result<Response<LogMealResponse>, ApiError> {
    let logged = state
        .service
        .parse_and_log_meal(payload.user_id, payload.text)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(LogMealResponse { data: logged }))
}
