use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::tracking::validators::AddFoodValidator;
use axum::extract::State;
use ginger_core::domain::tracking::entities::FoodLog;
use ginger_core::domain::tracking::ports::TrackingService;
use ginger_core::domain::tracking::value_objects::CreateFoodLogInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddFoodResponse {
    pub data: FoodLog,
}

#[utoipa::path(
    post,
    path = "/food",
    tag = "tracking",
    summary = "Log food",
    description = "Appends a food entry timestamped now.",
    responses(
        (status = 201, body = AddFoodResponse),
        (status = 404, description = "Unknown user")
    ),
    request_body = AddFoodValidator
)]
pub async fn add_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddFoodValidator>,
) -> Result<Response<AddFoodResponse>, ApiError> {
    let log = state
        .service
        .add_food(CreateFoodLogInput {
            user_id: payload.user_id,
            description: payload.description,
            calories: payload.calories,
            protein_g: payload.protein_g,
            carbs_g: payload.carbs_g,
            fat_g: payload.fat_g,
            sugar_g: payload.sugar_g,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddFoodResponse { data: log }))
}
