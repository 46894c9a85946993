use ginger_core::domain::profile::entities::{ActivityLevel, Goal, GoalPace, Sex};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(range(min = 1, max = 130, message = "age must be plausible"))]
    pub age: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 30.0, max = 300.0, message = "height_cm must be plausible"))]
    pub height_cm: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 1.0, max = 500.0, message = "weight_kg must be plausible"))]
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct OnboardingValidator {
    #[validate(range(min = 1, max = 130, message = "age must be plausible"))]
    pub age: i32,

    #[validate(range(min = 30.0, max = 300.0, message = "height_cm must be plausible"))]
    pub height_cm: f64,

    #[validate(range(min = 1.0, max = 500.0, message = "weight_kg must be plausible"))]
    pub weight_kg: f64,

    pub sex: Sex,

    pub activity_level: ActivityLevel,

    pub goal: Goal,

    pub goal_pace: GoalPace,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateGoalsValidator {
    pub user_id: uuid::Uuid,

    #[serde(default)]
    pub goal: Option<Goal>,

    #[serde(default)]
    #[validate(range(min = 1, message = "calorie_target_kcal must be positive"))]
    pub calorie_target_kcal: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 1, message = "protein_target_g must be positive"))]
    pub protein_target_g: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 0, message = "sugar_limit_g must not be negative"))]
    pub sugar_limit_g: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 1, message = "water_goal_ml must be positive"))]
    pub water_goal_ml: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 1, max = 48, message = "fasting_default_hours must be 1-48"))]
    pub fasting_default_hours: Option<i32>,
}
