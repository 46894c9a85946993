use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    fasting::ports::FastingSessionRepository,
    health::ports::HealthCheckRepository,
    meal_ai::ports::LLMClient,
    profile::{
        calculator,
        entities::UserProfile,
        ports::{ProfileService, UserProfileRepository},
        value_objects::{CreateUserInput, OnboardingInput, UpdateGoalsInput},
    },
    tracking::{
        entities::WeightLog,
        ports::{FoodLogRepository, WaterLogRepository, WeightLogRepository},
    },
};

impl<UP, FL, WA, WL, FS, HC, L> ProfileService for Service<UP, FL, WA, WL, FS, HC, L>
where
    UP: UserProfileRepository,
    FL: FoodLogRepository,
    WA: WaterLogRepository,
    WL: WeightLogRepository,
    FS: FastingSessionRepository,
    HC: HealthCheckRepository,
    L: LLMClient,
{
    async fn create_user(&self, input: CreateUserInput) -> Result<UserProfile, CoreError> {
        let profile = UserProfile::new(input.name, input.age, input.height_cm, input.weight_kg);
        self.user_profile_repository.create(profile).await
    }

    async fn list_users(&self) -> Result<Vec<UserProfile>, CoreError> {
        self.user_profile_repository.list().await
    }

    async fn get_user(&self, user_id: Uuid) -> Result<UserProfile, CoreError> {
        self.user_profile_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn onboarding(
        &self,
        user_id: Uuid,
        input: OnboardingInput,
    ) -> Result<UserProfile, CoreError> {
        let mut profile = self.get_user(user_id).await?;

        let weight_changed = profile.weight_kg != Some(input.weight_kg);

        profile.age = Some(input.age);
        profile.height_cm = Some(input.height_cm);
        profile.weight_kg = Some(input.weight_kg);
        profile.sex = Some(input.sex);
        profile.activity_level = Some(input.activity_level);
        profile.goal = Some(input.goal);
        profile.goal_pace = Some(input.goal_pace);

        // Weight changes are also recorded as history, so the weight series
        // picks up onboarding updates.
        if weight_changed {
            self.weight_log_repository
                .create(WeightLog::new(user_id, input.weight_kg))
                .await?;
        }

        calculator::recalc_all(&mut profile);
        profile.updated_at = Utc::now();

        self.user_profile_repository.update(profile).await
    }

    async fn update_goals(&self, input: UpdateGoalsInput) -> Result<UserProfile, CoreError> {
        let mut profile = self.get_user(input.user_id).await?;

        if let Some(goal) = input.goal {
            profile.goal = Some(goal);
        }
        if let Some(kcal) = input.calorie_target_kcal {
            profile.calorie_target_kcal = Some(kcal);
        }
        if let Some(protein) = input.protein_target_g {
            profile.protein_target_g = Some(protein);
        }
        if let Some(sugar) = input.sugar_limit_g {
            profile.sugar_limit_g = Some(sugar);
        }
        if let Some(water) = input.water_goal_ml {
            profile.water_goal_ml = Some(water);
        }
        if let Some(hours) = input.fasting_default_hours {
            profile.fasting_default_hours = Some(hours);
        }
        profile.updated_at = Utc::now();

        self.user_profile_repository.update(profile).await
    }

    async fn update_water_goal(
        &self,
        user_id: Uuid,
        water_goal_ml: i32,
    ) -> Result<UserProfile, CoreError> {
        let mut profile = self.get_user(user_id).await?;
        profile.water_goal_ml = Some(water_goal_ml);
        profile.updated_at = Utc::now();
        self.user_profile_repository.update(profile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        fasting::ports::MockFastingSessionRepository, health::ports::MockHealthCheckRepository,
        meal_ai::ports::MockLLMClient,
        profile::entities::{ActivityLevel, Goal, GoalPace, Sex},
        profile::ports::MockUserProfileRepository,
        tracking::ports::MockFoodLogRepository, tracking::ports::MockWaterLogRepository,
        tracking::ports::MockWeightLogRepository,
    };

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

    fn stored_user(user_id: Uuid, weight_kg: Option<f64>) -> MockUserProfileRepository {
        let mut users = MockUserProfileRepository::new();
        let profile = UserProfile::new("test".to_string(), Some(30), Some(180.0), weight_kg);
        users
            .expect_get_by_id()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(UserProfile { id: user_id, ..profile.clone() })))));
        users.expect_update().returning(|profile| Box::pin(std::future::ready(Ok(profile))));
        users
    }

    fn reference_input() -> OnboardingInput {
        OnboardingInput {
            age: 30,
            height_cm: 180.0,
            weight_kg: 80.0,
            sex: Sex::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Lose,
            goal_pace: GoalPace::Medium,
        }
    }

    #[tokio::test]
    async fn onboarding_recomputes_every_target() {
        let user_id = Uuid::new_v4();
        let mut weights = MockWeightLogRepository::new();
        weights.expect_create().returning(|log| Box::pin(std::future::ready(Ok(log))));

        let service = service(stored_user(user_id, Some(79.0)), weights);
        let profile = service.onboarding(user_id, reference_input()).await.unwrap();

        assert_eq!(profile.calorie_target_kcal, Some(2298));
        assert_eq!(profile.water_goal_ml, Some(2800));
        assert_eq!(profile.protein_target_g, Some(160));
        assert_eq!(profile.sugar_limit_g, Some(29));
        assert!(profile.updated_at > profile.created_at);
    }

    #[tokio::test]
    async fn onboarding_logs_weight_when_it_changes() {
        let user_id = Uuid::new_v4();
        let mut weights = MockWeightLogRepository::new();
        weights
            .expect_create()
            .withf(|log| log.weight_kg == 80.0)
            .times(1)
            .returning(|log| Box::pin(std::future::ready(Ok(log))));

        let service = service(stored_user(user_id, Some(79.0)), weights);
        service.onboarding(user_id, reference_input()).await.unwrap();
    }

    #[tokio::test]
    async fn onboarding_skips_the_weight_log_when_unchanged() {
        let user_id = Uuid::new_v4();
        let mut weights = MockWeightLogRepository::new();
        weights.expect_create().never();

        let service = service(stored_user(user_id, Some(80.0)), weights);
        service.onboarding(user_id, reference_input()).await.unwrap();
    }

    #[tokio::test]
    async fn onboarding_for_unknown_user_is_not_found() {
        let mut users = MockUserProfileRepository::new();
        users.expect_get_by_id().returning(|_| Box::pin(std::future::ready(Ok(None))));

        let service = service(users, MockWeightLogRepository::new());
        let result = service.onboarding(Uuid::new_v4(), reference_input()).await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }

    #[tokio::test]
    async fn update_goals_merges_only_the_provided_fields() {
        let user_id = Uuid::new_v4();

        let service = service(stored_user(user_id, Some(80.0)), MockWeightLogRepository::new());
        let profile = service
            .update_goals(UpdateGoalsInput {
                user_id,
                goal: Some(Goal::Gain),
                calorie_target_kcal: Some(2600),
                protein_target_g: None,
                sugar_limit_g: None,
                water_goal_ml: None,
                fasting_default_hours: Some(16),
            })
            .await
            .unwrap();

        assert_eq!(profile.goal, Some(Goal::Gain));
        assert_eq!(profile.calorie_target_kcal, Some(2600));
        assert_eq!(profile.protein_target_g, None);
        assert_eq!(profile.fasting_default_hours, Some(16));
        assert!(profile.updated_at > profile.created_at);
    }

    #[tokio::test]
    async fn update_water_goal_touches_updated_at() {
        let user_id = Uuid::new_v4();

        let service = service(stored_user(user_id, Some(80.0)), MockWeightLogRepository::new());
        let profile = service.update_water_goal(user_id, 2500).await.unwrap();

        assert_eq!(profile.water_goal_ml, Some(2500));
        assert!(profile.updated_at > profile.created_at);
    }
}
