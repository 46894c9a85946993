use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use ginger_core::domain::stats::ports::StatsService;
use ginger_core::domain::stats::value_objects::HourCaloriesPoint;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

fn default_days() -> u32 {
    14
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CaloriesByHourQuery {
    pub user_id: Uuid,

    #[serde(default = "default_days")]
    pub days: u32,

    /// IANA timezone name; defaults to Europe/Madrid.
    #[serde(default)]
    pub tz: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCaloriesByHourResponse {
    pub data: Vec<HourCaloriesPoint>,
}

#[utoipa::path(
    get,
    path = "/calories-by-hour",
    tag = "stats",
    summary = "Calories by hour of day",
    description = "24-bucket histogram of when calories were eaten over the trailing window.",
    responses(
        (status = 200, body = GetCaloriesByHourResponse),
        (status = 400, description = "Unknown timezone")
    ),
    params(CaloriesByHourQuery)
)]
pub async fn get_calories_by_hour(
    Query(query): Query<CaloriesByHourQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetCaloriesByHourResponse>, ApiError> {
    let points = state
        .service
        .calories_by_hour(query.user_id, query.days, query.tz)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCaloriesByHourResponse { data: points }))
}
