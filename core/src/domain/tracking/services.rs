use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    fasting::ports::FastingSessionRepository,
    health::ports::HealthCheckRepository,
    meal_ai::ports::LLMClient,
    profile::ports::UserProfileRepository,
    tracking::{
        entities::{FoodLog, FoodLogConfig, WaterLog, WeightLog},
        ports::{FoodLogRepository, TrackingService, WaterLogRepository, WeightLogRepository},
        value_objects::{CreateFoodLogInput, CreateWaterLogInput, CreateWeightLogInput},
    },
};

impl<UP, FL, WA, WL, FS, HC, L> TrackingService for Service<UP, FL, WA, WL, FS, HC, L>
where
    UP: UserProfileRepository,
    FL: FoodLogRepository,
    WA: WaterLogRepository,
    WL: WeightLogRepository,
    FS: FastingSessionRepository,
    HC: HealthCheckRepository,
    L: LLMClient,
{
    async fn add_food(&self, input: CreateFoodLogInput) -> Result<FoodLog, CoreError> {
        self.user_profile_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let log = FoodLog::new(FoodLogConfig {
            user_id: input.user_id,
            eaten_at: Utc::now(),
            description: input.description,
            calories: input.calories,
            protein_g: input.protein_g,
            carbs_g: input.carbs_g,
            fat_g: input.fat_g,
            sugar_g: input.sugar_g,
        });

        self.food_log_repository.create(log).await
    }

    async fn add_water(&self, input: CreateWaterLogInput) -> Result<WaterLog, CoreError> {
        self.user_profile_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let log = WaterLog::new(input.user_id, Utc::now(), input.ml);

        self.water_log_repository.create(log).await
    }

    async fn add_weight(&self, input: CreateWeightLogInput) -> Result<WeightLog, CoreError> {
        let mut profile = self
            .user_profile_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let log = self
            .weight_log_repository
            .create(WeightLog::new(input.user_id, input.weight_kg))
            .await?;

        // The profile's current weight follows the history.
        profile.weight_kg = Some(input.weight_kg);
        profile.updated_at = Utc::now();
        self.user_profile_repository.update(profile).await?;

        Ok(log)
    }

    async fn weight_series(&self, user_id: Uuid, days: u32) -> Result<Vec<WeightLog>, CoreError> {
        let to = Utc::now();
        let from = to - Duration::days(i64::from(days));

        self.weight_log_repository.find_between(user_id, from, to).await
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
    use std::sync::{Arc, Mutex};

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
        weight_log_repository: MockWeightLogRepository,
    ) -> TestService {
        Service::new(
            user_profile_repository,
            MockFoodLogRepository::new(),
            MockWaterLogRepository::new(),
            weight_log_repository,
            MockFastingSessionRepository::new(),
            MockHealthCheckRepository::new(),
            MockLLMClient::new(),
        )
    }

    #[tokio::test]
    async fn add_weight_appends_history_and_moves_the_profile_weight() {
        let user_id = Uuid::new_v4();

        let mut users = MockUserProfileRepository::new();
        let profile = UserProfile::new("test".to_string(), Some(30), Some(180.0), Some(80.0));
        users
            .expect_get_by_id()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(UserProfile { id: user_id, ..profile.clone() })))));

        let updated = Arc::new(Mutex::new(None));
        let seen = updated.clone();
        users.expect_update().returning(move |profile| {
            *seen.lock().unwrap() = Some(profile.clone());
            Box::pin(std::future::ready(Ok(profile)))
        });

        let mut weights = MockWeightLogRepository::new();
        weights.expect_create().returning(|log| Box::pin(std::future::ready(Ok(log))));

        let service = service(users, weights);
        let log = service
            .add_weight(CreateWeightLogInput { user_id, weight_kg: 78.5 })
            .await
            .unwrap();

        assert_eq!(log.user_id, user_id);
        assert_eq!(log.weight_kg, 78.5);

        let profile = updated.lock().unwrap().clone().expect("profile must be updated");
        assert_eq!(profile.weight_kg, Some(78.5));
        assert!(profile.updated_at > profile.created_at);
    }

    #[tokio::test]
    async fn add_weight_for_unknown_user_is_not_found() {
        let mut users = MockUserProfileRepository::new();
        users.expect_get_by_id().returning(|_| Box::pin(std::future::ready(Ok(None))));

        let mut weights = MockWeightLogRepository::new();
        weights.expect_create().never();

        let service = service(users, weights);
        let result = service
            .add_weight(CreateWeightLogInput {
                user_id: Uuid::new_v4(),
                weight_kg: 78.5,
            })
            .await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }
}
