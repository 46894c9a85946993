use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use std::time::Instant;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ping(&self) -> Result<u64, CoreError> {
        let started = Instant::now();

        self.db
            .execute(Statement::from_string(
                sea_orm::DatabaseBackend::Postgres,
                "SELECT 1",
            ))
            .await
            .map_err(|e| {
                error!("Database health check failed: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let latency_ms = self.ping().await?;

        Ok(DatabaseHealthStatus {
            status: "ok".to_string(),
            latency_ms,
        })
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.ping().await
    }
}
