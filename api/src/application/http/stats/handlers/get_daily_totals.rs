use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use ginger_core::domain::stats::ports::StatsService;
use ginger_core::domain::stats::value_objects::DailyTotalsPoint;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

fn default_days() -> u32 {
    30
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DailyTotalsQuery {
    pub user_id: Uuid,

    #[serde(default = "default_days")]
    pub days: u32,

    /// IANA timezone name; defaults to Europe/Madrid.
    #[serde(default)]
    pub tz: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDailyTotalsResponse {
    pub data: Vec<DailyTotalsPoint>,
}

#[utoipa::path(
    get,
    path = "/daily-totals",
    tag = "stats",
    summary = "Daily totals",
    description = "Per-day calorie and water totals over the trailing window, zero-filled.",
    responses(
        (status = 200, body = GetDailyTotalsResponse),
        (status = 400, description = "Unknown timezone")
    ),
    params(DailyTotalsQuery)
)]
pub async fn get_daily_totals(
    Query(query): Query<DailyTotalsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetDailyTotalsResponse>, ApiError> {
    let points = state
        .service
        .daily_totals(query.user_id, query.days, query.tz)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetDailyTotalsResponse { data: points }))
}
