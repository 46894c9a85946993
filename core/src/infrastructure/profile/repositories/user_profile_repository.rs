use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        profile::{entities::UserProfile, ports::UserProfileRepository},
    },
    entity::user_profiles::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresUserProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model_from(profile: &UserProfile) -> ActiveModel {
    ActiveModel {
        id: Set(profile.id),
        name: Set(profile.name.clone()),
        age: Set(profile.age),
        height_cm: Set(profile.height_cm),
        weight_kg: Set(profile.weight_kg),
        sex: Set(profile.sex.map(|v| v.as_str().to_string())),
        activity_level: Set(profile.activity_level.map(|v| v.as_str().to_string())),
        goal: Set(profile.goal.map(|v| v.as_str().to_string())),
        goal_pace: Set(profile.goal_pace.map(|v| v.as_str().to_string())),
        calorie_target_kcal: Set(profile.calorie_target_kcal),
        protein_target_g: Set(profile.protein_target_g),
        sugar_limit_g: Set(profile.sugar_limit_g),
        water_goal_ml: Set(profile.water_goal_ml),
        fasting_default_hours: Set(profile.fasting_default_hours),
        created_at: Set(profile.created_at.fixed_offset()),
        updated_at: Set(profile.updated_at.fixed_offset()),
    }
}

impl UserProfileRepository for PostgresUserProfileRepository {
    async fn create(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        let created = Entity::insert(active_model_from(&profile))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create user profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(UserProfile::from(created))
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let model = Entity::find()
            .filter(Column::Id.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(UserProfile::from))
    }

    async fn list(&self) -> Result<Vec<UserProfile>, CoreError> {
        let models = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list user profiles: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(UserProfile::from).collect())
    }

    async fn update(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        let updated = Entity::update(active_model_from(&profile))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update user profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(UserProfile::from(updated))
    }
}
