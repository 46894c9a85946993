use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TodayRecommendations {
    pub user_id: Uuid,
    /// ISO date of "today" in the requested timezone.
    pub date: String,
    /// Ordered: water, calories, fasting.
    pub messages: Vec<String>,
}
