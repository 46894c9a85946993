use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::profile::value_objects::NutritionTargets;

/// One calendar day of totals in the requested timezone. Days without events
/// are present with zeros so downstream charts stay contiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyTotalsPoint {
    /// ISO date (YYYY-MM-DD) in the requested timezone.
    pub date: String,
    pub calories: f64,
    pub water_ml: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HourCaloriesPoint {
    /// Hour of day, 0-23, in the requested timezone.
    pub hour: u32,
    pub calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyProgress {
    pub calories: f64,
    pub protein_g: f64,
    pub sugar_g: f64,
    pub water_ml: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TodaySummary {
    pub user_id: Uuid,
    /// ISO date of "today" in the requested timezone.
    pub date: String,
    pub targets: NutritionTargets,
    pub consumed: DailyProgress,
    pub fasting_active: bool,
    pub fasting_protocol: Option<String>,
    pub active_fasting_id: Option<Uuid>,
}
