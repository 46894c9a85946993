use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    stats::value_objects::{DailyTotalsPoint, HourCaloriesPoint, TodaySummary},
};

/// Service trait for time-windowed aggregations
pub trait StatsService: Send + Sync {
    /// Zero-filled per-day calorie/water totals over the trailing `days`,
    /// bucketed by calendar day in `tz` (default Europe/Madrid).
    fn daily_totals(
        &self,
        user_id: Uuid,
        days: u32,
        tz: Option<String>,
    ) -> impl Future<Output = Result<Vec<DailyTotalsPoint>, CoreError>> + Send;

    /// 24-bucket hour-of-day calorie histogram over the trailing `days`.
    fn calories_by_hour(
        &self,
        user_id: Uuid,
        days: u32,
        tz: Option<String>,
    ) -> impl Future<Output = Result<Vec<HourCaloriesPoint>, CoreError>> + Send;

    /// Targets plus consumed-today totals plus fasting state, for the
    /// current local day in `tz`.
    fn today_summary(
        &self,
        user_id: Uuid,
        tz: Option<String>,
    ) -> impl Future<Output = Result<TodaySummary, CoreError>> + Send;
}
