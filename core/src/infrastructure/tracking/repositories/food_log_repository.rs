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
        tracking::{entities::FoodLog, ports::FoodLogRepository},
    },
    entity::food_logs::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFoodLogRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// COALESCE keeps the no-rows case a defined zero instead of NULL.
    async fn sum_column(
        &self,
        column: &str,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<f64, CoreError> {
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT COALESCE(SUM({column}), 0)::float8 as total
                FROM food_logs
                WHERE user_id = $1 AND eaten_at >= $2 AND eaten_at < $3
                "#
            ),
            [
                user_id.into(),
                from.fixed_offset().into(),
                to.fixed_offset().into(),
            ],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to sum food log {}: {}", column, e);
            CoreError::InternalServerError
        })?;

        Ok(row
            .and_then(|row| row.try_get::<f64>("", "total").ok())
            .unwrap_or(0.0))
    }
}

impl FoodLogRepository for PostgresFoodLogRepository {
    async fn create(&self, log: FoodLog) -> Result<FoodLog, CoreError> {
        let active_model = ActiveModel {
            id: Set(log.id),
            user_id: Set(log.user_id),
            eaten_at: Set(log.eaten_at.fixed_offset()),
            description: Set(log.description.clone()),
            calories: Set(log.calories),
            protein_g: Set(log.protein_g),
            carbs_g: Set(log.carbs_g),
            fat_g: Set(log.fat_g),
            sugar_g: Set(log.sugar_g),
            created_at: Set(log.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create food log: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FoodLog::from(created))
    }

    async fn find_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<FoodLog>, CoreError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::EatenAt.gte(from.fixed_offset()))
            .filter(Column::EatenAt.lt(to.fixed_offset()))
            .order_by_asc(Column::EatenAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get food logs: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(FoodLog::from).collect())
    }

    async fn sum_calories_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<f64, CoreError> {
        self.sum_column("calories", user_id, from, to).await
    }

    async fn sum_protein_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<f64, CoreError> {
        self.sum_column("protein_g", user_id, from, to).await
    }

    async fn sum_sugar_between(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<f64, CoreError> {
        self.sum_column("sugar_g", user_id, from, to).await
    }
}
