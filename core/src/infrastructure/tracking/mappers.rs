use crate::{
    domain::tracking::entities::{FoodLog, WaterLog, WeightLog},
    entity::{food_logs, water_logs, weight_logs},
};

impl From<food_logs::Model> for FoodLog {
    fn from(model: food_logs::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            eaten_at: model.eaten_at.to_utc(),
            description: model.description,
            calories: model.calories,
            protein_g: model.protein_g,
            carbs_g: model.carbs_g,
            fat_g: model.fat_g,
            sugar_g: model.sugar_g,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<water_logs::Model> for WaterLog {
    fn from(model: water_logs::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            drank_at: model.drank_at.to_utc(),
            ml: model.ml,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<weight_logs::Model> for WeightLog {
    fn from(model: weight_logs::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            weight_kg: model.weight_kg,
            created_at: model.created_at.to_utc(),
        }
    }
}
