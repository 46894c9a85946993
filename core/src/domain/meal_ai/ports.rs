use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_ai::value_objects::{LoggedMeal, MealBreakdown},
};

/// Client trait for the external text-generation service. Blocking I/O
/// boundary with no internal timeout or retry; callers impose their own.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for natural-language meal parsing
pub trait MealAiService: Send + Sync {
    /// Side-effect free; safe to retry.
    fn parse_meal(
        &self,
        text: String,
    ) -> impl Future<Output = Result<MealBreakdown, CoreError>> + Send;

    /// Parses and appends a food log entry. The append is not idempotent;
    /// do not retry blindly.
    fn parse_and_log_meal(
        &self,
        user_id: Uuid,
        text: String,
    ) -> impl Future<Output = Result<LoggedMeal, CoreError>> + Send;
}
