use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    fasting::ports::FastingSessionRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    meal_ai::ports::LLMClient,
    profile::ports::UserProfileRepository,
    tracking::ports::{FoodLogRepository, WaterLogRepository, WeightLogRepository},
};

impl<UP, FL, WA, WL, FS, HC, L> HealthCheckService for Service<UP, FL, WA, WL, FS, HC, L>
where
    UP: UserProfileRepository,
    FL: FoodLogRepository,
    WA: WaterLogRepository,
    WL: WeightLogRepository,
    FS: FastingSessionRepository,
    HC: HealthCheckRepository,
    L: LLMClient,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
