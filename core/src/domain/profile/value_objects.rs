use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::profile::entities::{ActivityLevel, Goal, GoalPace, Sex};

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub name: String,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

/// Body metrics captured during onboarding. Targets are derived from these,
/// never supplied directly.
#[derive(Debug, Clone)]
pub struct OnboardingInput {
    pub age: i32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub sex: Sex,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub goal_pace: GoalPace,
}

#[derive(Debug, Clone)]
pub struct UpdateGoalsInput {
    pub user_id: Uuid,
    pub goal: Option<Goal>,
    pub calorie_target_kcal: Option<i32>,
    pub protein_target_g: Option<i32>,
    pub sugar_limit_g: Option<i32>,
    pub water_goal_ml: Option<i32>,
    pub fasting_default_hours: Option<i32>,
}

/// Derived daily targets, recomputed whenever the owning profile's metrics
/// change. Water defaults to 2000 ml when the profile has no goal yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionTargets {
    pub calorie_target_kcal: Option<i32>,
    pub protein_target_g: Option<i32>,
    pub sugar_limit_g: Option<i32>,
    pub water_goal_ml: i32,
}
