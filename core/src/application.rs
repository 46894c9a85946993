use crate::domain::common::{GingerConfig, services::Service};
use crate::infrastructure::{
    db::postgres::{Postgres, PostgresConfig},
    fasting::repositories::fasting_session_repository::PostgresFastingSessionRepository,
    health::repositories::health_check_repository::PostgresHealthCheckRepository,
    llm::gemini_client::GeminiLLMClient,
    profile::repositories::user_profile_repository::PostgresUserProfileRepository,
    tracking::repositories::{
        food_log_repository::PostgresFoodLogRepository,
        water_log_repository::PostgresWaterLogRepository,
        weight_log_repository::PostgresWeightLogRepository,
    },
};

pub type GingerService = Service<
    PostgresUserProfileRepository,
    PostgresFoodLogRepository,
    PostgresWaterLogRepository,
    PostgresWeightLogRepository,
    PostgresFastingSessionRepository,
    PostgresHealthCheckRepository,
    GeminiLLMClient,
>;

pub async fn create_service(config: GingerConfig) -> Result<GingerService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );

    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresUserProfileRepository::new(db.clone()),
        PostgresFoodLogRepository::new(db.clone()),
        PostgresWaterLogRepository::new(db.clone()),
        PostgresWeightLogRepository::new(db.clone()),
        PostgresFastingSessionRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        GeminiLLMClient::new(config.llm.gemini_api_key, config.llm.gemini_model),
    ))
}
