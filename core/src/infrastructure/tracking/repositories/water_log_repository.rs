use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Statement,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        tracking::{entities::WaterLog, ports::WaterLogRepository},
    },
    entity::water_logs::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresWaterLogRepository {
    pub db: DatabaseConnection,
}

impl PostgresWaterLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl WaterLogRepository for PostgresWaterLogRepository {
    async fn create(&self, log: WaterLog) -> Result<WaterLog, CoreError> {
        let active_model = ActiveModel {
            id: Set(log.id),
            user_id: Set(log.user_id),
            drank_at: Set(log.drank_at.fixed_offset()),
            ml: Set(log.ml),
            created_at: Set(log.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create water log: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(WaterLog::from(created))
    }

    async fn find_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<WaterLog>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DrankAt.gte(from.fixed_offset()))
            .filter(Column::DrankAt.lt(to.fixed_offset()))
            .order_by_asc(Column::DrankAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get water logs: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(WaterLog::from).collect())
    }

    async fn sum_water_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<i64, CoreError> {
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT COALESCE(SUM(ml), 0)::int8 as total
            FROM water_logs
            WHERE user_id = $1 AND drank_at >= $2 AND drank_at < $3
            "#,
            [
                user_id.into(),
                from.fixed_offset().into(),
                to.fixed_offset().into(),
            ],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to sum water logs: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(row
            .and_then(|row| row.try_get::<i64>("", "total").ok())
            .unwrap_or(0))
    }
}
