use crate::{domain::fasting::entities::FastingSession, entity::fasting_sessions};

impl From<fasting_sessions::Model> for FastingSession {
    fn from(model: fasting_sessions::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            started_at: model.started_at.to_utc(),
            ended_at: model.ended_at.map(|t| t.to_utc()),
            protocol: model.protocol,
        }
    }
}
