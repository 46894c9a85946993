use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddFoodValidator {
    pub user_id: Uuid,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(range(min = 0.0, message = "calories must not be negative"))]
    pub calories: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "protein_g must not be negative"))]
    pub protein_g: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "carbs_g must not be negative"))]
    pub carbs_g: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "fat_g must not be negative"))]
    pub fat_g: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "sugar_g must not be negative"))]
    pub sugar_g: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddWaterValidator {
    pub user_id: Uuid,

    #[validate(range(min = 1, message = "ml must be positive"))]
    pub ml: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddWeightValidator {
    pub user_id: Uuid,

    #[validate(range(min = 1.0, max = 500.0, message = "weight_kg must be plausible"))]
    pub weight_kg: f64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateWaterGoalValidator {
    pub user_id: Uuid,

    #[validate(range(min = 1, message = "water_goal_ml must be positive"))]
    pub water_goal_ml: i32,
}
