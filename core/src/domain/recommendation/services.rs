use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    fasting::{helpers::fasting_suggestion, ports::FastingSessionRepository},
    health::ports::HealthCheckRepository,
    meal_ai::ports::LLMClient,
    profile::ports::UserProfileRepository,
    recommendation::{
        helpers::{calories_message, water_message},
        ports::RecommendationService,
        value_objects::TodayRecommendations,
    },
    stats::buckets::{day_start_utc, local_day, parse_timezone},
    stats::services::DEFAULT_WATER_GOAL_ML,
    tracking::ports::{FoodLogRepository, WaterLogRepository, WeightLogRepository},
};

impl<UP, FL, WA, WL, FS, HC, L> RecommendationService for Service<UP, FL, WA, WL, FS, HC, L>
where
    UP: UserProfileRepository,
    FL: FoodLogRepository,
    WA: WaterLogRepository,
    WL: WeightLogRepository,
    FS: FastingSessionRepository,
    HC: HealthCheckRepository,
    L: LLMClient,
{
    async fn today_recommendations(
        &self,
        user_id: Uuid,
        tz: Option<String>,
    ) -> Result<TodayRecommendations, CoreError> {
        let profile = self
            .user_profile_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let zone = parse_timezone(tz.as_deref())?;
        let now = Utc::now();
        let today = local_day(now, zone);
        let from = day_start_utc(today, zone);

        let calories_today = self
            .food_log_repository
            .sum_calories_between(user_id, from, now)
            .await?;
        let water_today = self
            .water_log_repository
            .sum_water_between(user_id, from, now)
            .await?;

        let water_goal = i64::from(profile.water_goal_ml.unwrap_or(DEFAULT_WATER_GOAL_ML));

        let mut messages = Vec::with_capacity(3);
        messages.push(water_message(water_goal, water_today));
        messages.push(calories_message(calories_today));

        match self.fasting_session_repository.find_open(user_id).await? {
            Some(session) => {
                let minutes = (now - session.started_at).num_minutes();
                messages.push(fasting_suggestion(Some(&session.protocol), minutes));
            }
            None => messages.push(
                "Fasting: no active session. Start one with the protocol you prefer (e.g. 16:8)."
                    .to_string(),
            ),
        }

        Ok(TodayRecommendations {
            user_id,
            date: today.format("%Y-%m-%d").to_string(),
            messages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        fasting::entities::FastingSession, fasting::ports::MockFastingSessionRepository,
        health::ports::MockHealthCheckRepository, meal_ai::ports::MockLLMClient,
        profile::entities::UserProfile, profile::ports::MockUserProfileRepository,
        tracking::ports::MockFoodLogRepository, tracking::ports::MockWaterLogRepository,
        tracking::ports::MockWeightLogRepository,
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
        user_id: Uuid,
        calories_today: f64,
        water_today: i64,
        open_session: Option<FastingSession>,
    ) -> TestService {
        let mut users = MockUserProfileRepository::new();
        let profile = UserProfile::new("test".to_string(), Some(30), Some(180.0), Some(80.0));
        users
            .expect_get_by_id()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(UserProfile { id: user_id, ..profile.clone() })))));

        let mut foods = MockFoodLogRepository::new();
        foods
            .expect_sum_calories_between()
            .returning(move |_, _, _| Box::pin(std::future::ready(Ok(calories_today))));

        let mut waters = MockWaterLogRepository::new();
        waters
            .expect_sum_water_between()
            .returning(move |_, _, _| Box::pin(std::future::ready(Ok(water_today))));

        let mut sessions = MockFastingSessionRepository::new();
        sessions
            .expect_find_open()
            .returning(move |_| Box::pin(std::future::ready(Ok(open_session.clone()))));

        Service::new(
            users,
            foods,
            waters,
            MockWeightLogRepository::new(),
            sessions,
            MockHealthCheckRepository::new(),
            MockLLMClient::new(),
        )
    }

    #[tokio::test]
    async fn messages_come_in_water_calories_fasting_order() {
        let user_id = Uuid::new_v4();
        let mut open = FastingSession::new(user_id, Some("16:8".to_string()));
        open.started_at = Utc::now() - Duration::minutes(700);

        let service = service(user_id, 900.0, 1000, Some(open));
        let recs = service.today_recommendations(user_id, None).await.unwrap();

        assert_eq!(recs.user_id, user_id);
        assert_eq!(recs.messages.len(), 3);
        assert!(recs.messages[0].starts_with("Water:"));
        assert!(recs.messages[1].starts_with("Food:"));
        assert!(recs.messages[2].contains("(16:8)"));
    }

    #[tokio::test]
    async fn idle_fast_gets_a_start_prompt() {
        let user_id = Uuid::new_v4();

        let service = service(user_id, 0.0, 0, None);
        let recs = service.today_recommendations(user_id, None).await.unwrap();

        assert_eq!(recs.messages.len(), 3);
        assert!(recs.messages[1].contains("no calories logged"));
        assert!(recs.messages[2].contains("no active session"));
    }

    #[tokio::test]
    async fn recommendations_for_unknown_user_are_not_found() {
        let mut users = MockUserProfileRepository::new();
        users.expect_get_by_id().returning(|_| Box::pin(std::future::ready(Ok(None))));

        let service = Service::new(
            users,
            MockFoodLogRepository::new(),
            MockWaterLogRepository::new(),
            MockWeightLogRepository::new(),
            MockFastingSessionRepository::new(),
            MockHealthCheckRepository::new(),
            MockLLMClient::new(),
        );

        let result = service.today_recommendations(Uuid::new_v4(), None).await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }
}
