use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        tracking::{entities::WeightLog, ports::WeightLogRepository},
    },
    entity::weight_logs::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresWeightLogRepository {
    pub db: DatabaseConnection,
}

impl PostgresWeightLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl WeightLogRepository for PostgresWeightLogRepository {
    async fn create(&self, log: WeightLog) -> Result<WeightLog, CoreError> {
        let active_model = ActiveModel {
            id: Set(log.id),
            user_id: Set(log.user_id),
            weight_kg: Set(log.weight_kg),
            created_at: Set(log.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create weight log: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(WeightLog::from(created))
    }

    async fn find_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<WeightLog>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CreatedAt.gte(from.fixed_offset()))
            .filter(Column::CreatedAt.lt(to.fixed_offset()))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get weight logs: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(WeightLog::from).collect())
    }
}
