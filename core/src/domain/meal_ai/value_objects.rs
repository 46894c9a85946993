use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::tracking::entities::FoodLog;

/// Structured nutrition estimate derived from free text. Only structural
/// well-formedness is validated; the model's arithmetic is trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealBreakdown {
    pub description: String,
    pub total_calories: f64,
    pub total_protein_g: f64,
    pub total_carbs_g: f64,
    pub total_fat_g: f64,
    pub items: Vec<MealItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealItem {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub calories: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoggedMeal {
    pub log: FoodLog,
    pub breakdown: MealBreakdown,
}
