use crate::{domain::profile::entities::UserProfile, entity::user_profiles};

impl From<user_profiles::Model> for UserProfile {
    fn from(model: user_profiles::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
            height_cm: model.height_cm,
            weight_kg: model.weight_kg,
            // Unknown stored labels read back as None rather than failing
            // the whole row.
            sex: model.sex.as_deref().and_then(|s| s.parse().ok()),
            activity_level: model.activity_level.as_deref().and_then(|s| s.parse().ok()),
            goal: model.goal.as_deref().and_then(|s| s.parse().ok()),
            goal_pace: model.goal_pace.as_deref().and_then(|s| s.parse().ok()),
            calorie_target_kcal: model.calorie_target_kcal,
            protein_target_g: model.protein_target_g,
            sugar_limit_g: model.sugar_limit_g,
            water_goal_ml: model.water_goal_ml,
            fasting_default_hours: model.fasting_default_hours,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
