use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    fasting::{
        entities::FastingSession,
        helpers::fasting_suggestion,
        ports::{FastingService, FastingSessionRepository},
        value_objects::FastingStatus,
    },
    health::ports::HealthCheckRepository,
    meal_ai::ports::LLMClient,
    profile::ports::UserProfileRepository,
    tracking::ports::{FoodLogRepository, WaterLogRepository, WeightLogRepository},
};

impl<UP, FL, WA, WL, FS, HC, L> FastingService for Service<UP, FL, WA, WL, FS, HC, L>
where
    UP: UserProfileRepository,
    FL: FoodLogRepository,
    WA: WaterLogRepository,
    WL: WeightLogRepository,
    FS: FastingSessionRepository,
    HC: HealthCheckRepository,
    L: LLMClient,
{
    async fn start_fasting(
        &self,
        user_id: Uuid,
        protocol: Option<String>,
    ) -> Result<FastingSession, CoreError> {
        self.user_profile_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        // Optimistic create: the store's partial unique index on open
        // sessions is the authority, so concurrent starts cannot both
        // succeed. The repository surfaces the violation as Conflict.
        let session = FastingSession::new(user_id, protocol);
        self.fasting_session_repository.create(session).await
    }

    async fn stop_fasting(&self, user_id: Uuid) -> Result<FastingSession, CoreError> {
        let mut session = self
            .fasting_session_repository
            .find_open(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        session.ended_at = Some(Utc::now());

        self.fasting_session_repository.update(session).await
    }

    async fn fasting_status(&self, user_id: Uuid) -> Result<FastingStatus, CoreError> {
        self.user_profile_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let open = self.fasting_session_repository.find_open(user_id).await?;

        let Some(session) = open else {
            return Ok(FastingStatus {
                user_id,
                active: false,
                session_id: None,
                protocol: None,
                elapsed_minutes: 0,
                suggestion: "No active fast. Start one with /fasting/start whenever you like."
                    .to_string(),
            });
        };

        let elapsed_minutes = (Utc::now() - session.started_at).num_minutes();
        let suggestion = fasting_suggestion(Some(&session.protocol), elapsed_minutes);

        Ok(FastingStatus {
            user_id,
            active: true,
            session_id: Some(session.id),
            protocol: Some(session.protocol),
            elapsed_minutes,
            suggestion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        fasting::ports::MockFastingSessionRepository, health::ports::MockHealthCheckRepository,
        meal_ai::ports::MockLLMClient, profile::entities::UserProfile,
        profile::ports::MockUserProfileRepository, tracking::ports::MockFoodLogRepository,
        tracking::ports::MockWaterLogRepository, tracking::ports::MockWeightLogRepository,
    };
    use chrono::Duration;

    type TestService = Service<
        MockUserProfileRepository,
        MockFoodLogRepository,
        MockWaterLogRepository,
        MockWeightLogRepository,
        MockFastingSessionRepository,
        MockHealthCheckRepository,
        MockLLMClient,
    >;

    fn service(
        user_profile_repository: MockUserProfileRepository,
        fasting_session_repository: MockFastingSessionRepository,
    ) -> TestService {
        Service::new(
            user_profile_repository,
            MockFoodLogRepository::new(),
            MockWaterLogRepository::new(),
            MockWeightLogRepository::new(),
            fasting_session_repository,
            MockHealthCheckRepository::new(),
            MockLLMClient::new(),
        )
    }

    fn known_user(user_id: Uuid) -> MockUserProfileRepository {
        let mut users = MockUserProfileRepository::new();
        let profile = UserProfile::new("test".to_string(), Some(30), Some(180.0), Some(80.0));
        users
            .expect_get_by_id()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(UserProfile { id: user_id, ..profile.clone() })))));
        users
    }

    #[tokio::test]
    async fn start_creates_an_open_session() {
        let user_id = Uuid::new_v4();
        let mut sessions = MockFastingSessionRepository::new();
        sessions.expect_create().returning(|session| Box::pin(std::future::ready(Ok(session))));

        let service = service(known_user(user_id), sessions);
        let session = service
            .start_fasting(user_id, Some("16:8".to_string()))
            .await
            .unwrap();

        assert_eq!(session.user_id, user_id);
        assert_eq!(session.protocol, "16:8");
        assert!(session.ended_at.is_none());
    }

    #[tokio::test]
    async fn start_defaults_blank_protocol_to_custom() {
        let user_id = Uuid::new_v4();
        let mut sessions = MockFastingSessionRepository::new();
        sessions.expect_create().returning(|session| Box::pin(std::future::ready(Ok(session))));

        let service = service(known_user(user_id), sessions);
        let session = service
            .start_fasting(user_id, Some("   ".to_string()))
            .await
            .unwrap();

        assert_eq!(session.protocol, "custom");
    }

    #[tokio::test]
    async fn start_surfaces_storage_conflict() {
        let user_id = Uuid::new_v4();
        let mut sessions = MockFastingSessionRepository::new();
        sessions.expect_create().returning(|_| {
            Box::pin(std::future::ready(Err(CoreError::Conflict(
                "user already has an active fasting session".to_string(),
            ))))
        });

        let service = service(known_user(user_id), sessions);
        let result = service.start_fasting(user_id, None).await;

        assert!(matches!(result, Err(CoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn start_for_unknown_user_is_not_found() {
        let mut users = MockUserProfileRepository::new();
        users.expect_get_by_id().returning(|_| Box::pin(std::future::ready(Ok(None))));

        let service = service(users, MockFastingSessionRepository::new());
        let result = service.start_fasting(Uuid::new_v4(), None).await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }

    #[tokio::test]
    async fn stop_without_open_session_is_not_found() {
        let user_id = Uuid::new_v4();
        let mut sessions = MockFastingSessionRepository::new();
        sessions.expect_find_open().returning(|_| Box::pin(std::future::ready(Ok(None))));

        let service = service(known_user(user_id), sessions);
        let result = service.stop_fasting(user_id).await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }

    #[tokio::test]
    async fn stop_closes_the_open_session() {
        let user_id = Uuid::new_v4();
        let open = FastingSession::new(user_id, Some("16:8".to_string()));
        let started_at = open.started_at;

        let mut sessions = MockFastingSessionRepository::new();
        let returned = open.clone();
        sessions
            .expect_find_open()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(returned.clone())))));
        sessions.expect_update().returning(|session| Box::pin(std::future::ready(Ok(session))));

        let service = service(known_user(user_id), sessions);
        let session = service.stop_fasting(user_id).await.unwrap();

        let ended_at = session.ended_at.expect("session must be closed");
        assert!(started_at <= ended_at);
    }

    #[tokio::test]
    async fn status_is_idle_without_a_session() {
        let user_id = Uuid::new_v4();
        let mut sessions = MockFastingSessionRepository::new();
        sessions.expect_find_open().returning(|_| Box::pin(std::future::ready(Ok(None))));

        let service = service(known_user(user_id), sessions);
        let status = service.fasting_status(user_id).await.unwrap();

        assert!(!status.active);
        assert_eq!(status.elapsed_minutes, 0);
        assert!(status.session_id.is_none());
    }

    #[tokio::test]
    async fn status_reports_elapsed_minutes_for_an_open_session() {
        let user_id = Uuid::new_v4();
        let mut open = FastingSession::new(user_id, Some("16:8".to_string()));
        open.started_at = Utc::now() - Duration::minutes(90);

        let mut sessions = MockFastingSessionRepository::new();
        let returned = open.clone();
        sessions
            .expect_find_open()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(returned.clone())))));

        let service = service(known_user(user_id), sessions);
        let status = service.fasting_status(user_id).await.unwrap();

        assert!(status.active);
        assert_eq!(status.session_id, Some(open.id));
        assert!(status.elapsed_minutes >= 90);
        assert!(status.suggestion.contains("(16:8)"));
    }
}
