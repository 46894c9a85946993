use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

/// Tables and indexes the application needs. The open-session uniqueness
/// rule for fasting lives here as a partial unique index so concurrent
/// starts race at the database, not in application code.
const SCHEMA_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS user_profiles (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    age INTEGER,
    height_cm DOUBLE PRECISION,
    weight_kg DOUBLE PRECISION,
    sex TEXT,
    activity_level TEXT,
    goal TEXT,
    goal_pace TEXT,
    calorie_target_kcal INTEGER,
    protein_target_g INTEGER,
    sugar_limit_g INTEGER,
    water_goal_ml INTEGER,
    fasting_default_hours INTEGER,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS food_logs (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL REFERENCES user_profiles(id),
    eaten_at TIMESTAMPTZ NOT NULL,
    description TEXT NOT NULL,
    calories DOUBLE PRECISION NOT NULL,
    protein_g DOUBLE PRECISION,
    carbs_g DOUBLE PRECISION,
    fat_g DOUBLE PRECISION,
    sugar_g DOUBLE PRECISION,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_food_logs_user_eaten_at
    ON food_logs (user_id, eaten_at);

CREATE TABLE IF NOT EXISTS water_logs (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL REFERENCES user_profiles(id),
    drank_at TIMESTAMPTZ NOT NULL,
    ml INTEGER NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_water_logs_user_drank_at
    ON water_logs (user_id, drank_at);

CREATE TABLE IF NOT EXISTS weight_logs (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL REFERENCES user_profiles(id),
    weight_kg DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_weight_logs_user_created_at
    ON weight_logs (user_id, created_at);

CREATE TABLE IF NOT EXISTS fasting_sessions (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL REFERENCES user_profiles(id),
    started_at TIMESTAMPTZ NOT NULL,
    ended_at TIMESTAMPTZ,
    protocol TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS uq_fasting_sessions_open
    ON fasting_sessions (user_id) WHERE ended_at IS NULL;
"#;

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self> {
        let db = Database::connect(&config.database_url).await?;
        info!("connected to database");

        db.execute_unprepared(SCHEMA_DDL).await?;
        info!("database schema is up to date");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
