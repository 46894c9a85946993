use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use ginger_core::domain::tracking::entities::WeightLog;
use ginger_core::domain::tracking::ports::TrackingService;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

fn default_days() -> u32 {
    90
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct WeightSeriesQuery {
    pub user_id: Uuid,

    #[serde(default = "default_days")]
    pub days: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetWeightSeriesResponse {
    pub data: Vec<WeightLog>,
}

#[utoipa::path(
    get,
    path = "/weight",
    tag = "stats",
    summary = "Weight history",
    description = "Chronological weight entries over the trailing window.",
    responses(
        (status = 200, body = GetWeightSeriesResponse)
    ),
    params(WeightSeriesQuery)
)]
pub async fn get_weight_series(
    Query(query): Query<WeightSeriesQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetWeightSeriesResponse>, ApiError> {
    let logs = state
        .service
        .weight_series(query.user_id, query.days)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetWeightSeriesResponse { data: logs }))
}
