use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use ginger_core::domain::stats::ports::StatsService;
use ginger_core::domain::stats::value_objects::TodaySummary;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct TodaySummaryQuery {
    pub user_id: Uuid,

    /// IANA timezone name; defaults to Europe/Madrid.
    #[serde(default)]
    pub tz: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTodaySummaryResponse {
    pub data: TodaySummary,
}

#[utoipa::path(
    get,
    path = "/summary/today",
    tag = "summary",
    summary = "Today's summary",
    description = "Targets, consumed-so-far totals and fasting state for the current local day.",
    responses(
        (status = 200, body = GetTodaySummaryResponse),
        (status = 404, description = "Unknown user")
    ),
    params(TodaySummaryQuery)
)]
pub async fn get_today_summary(
    Query(query): Query<TodaySummaryQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetTodaySummaryResponse>, ApiError> {
    let summary = state
        .service
        .today_summary(query.user_id, query.tz)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTodaySummaryResponse { data: summary }))
}
