use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Query, State};
use ginger_core::domain::recommendation::ports::RecommendationService;
use ginger_core::domain::recommendation::value_objects::TodayRecommendations;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct TodayRecommendationsQuery {
    pub user_id: Uuid,

    /// IANA timezone name; defaults to Europe/Madrid.
    #[serde(default)]
    pub tz: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTodayRecommendationsResponse {
    pub data: TodayRecommendations,
}

#[utoipa::path(
    get,
    path = "/recommendations/today",
    tag = "summary",
    summary = "Today's recommendations",
    description = "Ordered water, calorie and fasting guidance for the current local day.",
    responses(
        (status = 200, body = GetTodayRecommendationsResponse),
        (status = 404, description = "Unknown user")
    ),
    params(TodayRecommendationsQuery)
)]
pub async fn get_today_recommendations(
    Query(query): Query<TodayRecommendationsQuery>,
    State(state): State<AppState>,
) -> Result<Response<GetTodayRecommendationsResponse>, ApiError> {
    let recommendations = state
        .service
        .today_recommendations(query.user_id, query.tz)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetTodayRecommendationsResponse {
        data: recommendations,
    }))
}
