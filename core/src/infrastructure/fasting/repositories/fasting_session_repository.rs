use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        fasting::{entities::FastingSession, ports::FastingSessionRepository},
    },
    entity::fasting_sessions::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFastingSessionRepository {
    pub db: DatabaseConnection,
}

impl PostgresFastingSessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model_from(session: &FastingSession) -> ActiveModel {
    ActiveModel {
        id: Set(session.id),
        user_id: Set(session.user_id),
        started_at: Set(session.started_at.fixed_offset()),
        ended_at: Set(session.ended_at.map(|t| t.fixed_offset())),
        protocol: Set(session.protocol.clone()),
    }
}

impl FastingSessionRepository for PostgresFastingSessionRepository {
    async fn create(&self, session: FastingSession) -> Result<FastingSession, CoreError> {
        let created = Entity::insert(active_model_from(&session))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                // The partial unique index on open sessions fires here when
                // the user already has a running fast.
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    return CoreError::Conflict(
                        "user already has an active fasting session".to_string(),
                    );
                }
                error!("Failed to create fasting session: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FastingSession::from(created))
    }

    async fn find_open(&self, user_id: Uuid) -> Result<Option<FastingSession>, CoreError> {
        let model = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::EndedAt.is_null())
            .order_by_desc(Column::StartedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get open fasting session: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(FastingSession::from))
    }

    async fn update(&self, session: FastingSession) -> Result<FastingSession, CoreError> {
        let updated = Entity::update(active_model_from(&session))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update fasting session: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(FastingSession::from(updated))
    }
}
