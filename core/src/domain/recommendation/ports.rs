use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, recommendation::value_objects::TodayRecommendations,
};

/// Service trait for user-facing daily suggestions
pub trait RecommendationService: Send + Sync {
    fn today_recommendations(
        &self,
        user_id: Uuid,
        tz: Option<String>,
    ) -> impl Future<Output = Result<TodayRecommendations, CoreError>> + Send;
}
