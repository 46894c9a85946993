use chrono::{DateTime, Utc};
use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    tracking::{
        entities::{FoodLog, WaterLog, WeightLog},
        value_objects::{CreateFoodLogInput, CreateWaterLogInput, CreateWeightLogInput},
    },
};

/// Repository trait for food log persistence. Sum queries treat "no matching
/// rows" as a defined zero, never as an absent value.
#[cfg_attr(test, mockall::automock)]
pub trait FoodLogRepository: Send + Sync {
    fn create(&self, log: FoodLog) -> impl Future<Output = Result<FoodLog, CoreError>> + Send;

    fn find_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<FoodLog>, CoreError>> + Send;

    fn sum_calories_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = Result<f64, CoreError>> + Send;

    fn sum_protein_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = Result<f64, CoreError>> + Send;

    fn sum_sugar_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = Result<f64, CoreError>> + Send;
}

/// Repository trait for water log persistence
#[cfg_attr(test, mockall::automock)]
pub trait WaterLogRepository: Send + Sync {
    fn create(&self, log: WaterLog) -> impl Future<Output = Result<WaterLog, CoreError>> + Send;

    fn find_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<WaterLog>, CoreError>> + Send;

    fn sum_water_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = Result<i64, CoreError>> + Send;
}

/// Repository trait for weight log persistence
#[cfg_attr(test, mockall::automock)]
pub trait WeightLogRepository: Send + Sync {
    fn create(&self, log: WeightLog)
    -> impl Future<Output = Result<WeightLog, CoreError>> + Send;

    fn find_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<WeightLog>, CoreError>> + Send;
}

/// Service trait for append-only event logging
pub trait TrackingService: Send + Sync {
    fn add_food(
        &self,
        input: CreateFoodLogInput,
    ) -> impl Future<Output = Result<FoodLog, CoreError>> + Send;

    fn add_water(
        &self,
        input: CreateWaterLogInput,
    ) -> impl Future<Output = Result<WaterLog, CoreError>> + Send;

    /// Appends to the weight history and moves the profile's current weight
    /// to the new value.
    fn add_weight(
        &self,
        input: CreateWeightLogInput,
    ) -> impl Future<Output = Result<WeightLog, CoreError>> + Send;

    fn weight_series(
        &self,
        user_id: Uuid,
        days: u32,
    ) -> impl Future<Output = Result<Vec<WeightLog>, CoreError>> + Send;
}
