use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A single logged meal or snack. Append-only; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub eaten_at: DateTime<Utc>,
    pub description: String,
    pub calories: f64,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub sugar_g: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FoodLogConfig {
    pub user_id: Uuid,
    pub eaten_at: DateTime<Utc>,
    pub description: String,
    pub calories: f64,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
    pub sugar_g: Option<f64>,
}

impl FoodLog {
    pub fn new(config: FoodLogConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            eaten_at: config.eaten_at,
            description: config.description,
            calories: config.calories,
            protein_g: config.protein_g,
            carbs_g: config.carbs_g,
            fat_g: config.fat_g,
            sugar_g: config.sugar_g,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WaterLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub drank_at: DateTime<Utc>,
    pub ml: i32,
    pub created_at: DateTime<Utc>,
}

impl WaterLog {
    pub fn new(user_id: Uuid, drank_at: DateTime<Utc>, ml: i32) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            drank_at,
            ml,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeightLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub weight_kg: f64,
    pub created_at: DateTime<Utc>,
}

impl WeightLog {
    pub fn new(user_id: Uuid, weight_kg: f64) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            weight_kg,
            created_at: now,
        }
    }
}
