use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    fasting::ports::FastingSessionRepository,
    health::ports::HealthCheckRepository,
    meal_ai::{
        helpers::strip_code_fences,
        ports::{LLMClient, MealAiService},
        prompt::meal_prompt,
        value_objects::{LoggedMeal, MealBreakdown, MealItem},
    },
    profile::ports::UserProfileRepository,
    tracking::{
        entities::{FoodLog, FoodLogConfig},
        ports::{FoodLogRepository, WaterLogRepository, WeightLogRepository},
    },
};

fn f64_field(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(Value::as_f64)
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}

/// Lenient read of the model's JSON. Missing totals become 0 and missing
/// item fields stay None; a malformed document is the caller's error to map.
fn breakdown_from_json(raw: &Value, fallback_description: &str) -> MealBreakdown {
    let items = raw
        .get("items")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| MealItem {
                    name: string_field(entry, "name"),
                    quantity: string_field(entry, "quantity"),
                    calories: f64_field(entry, "calories"),
                    protein_g: f64_field(entry, "proteinG"),
                    carbs_g: f64_field(entry, "carbsG"),
                    fat_g: f64_field(entry, "fatG"),
                })
                .collect()
        })
        .unwrap_or_default();

    MealBreakdown {
        description: string_field(raw, "description")
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| fallback_description.to_string()),
        total_calories: f64_field(raw, "totalCalories").unwrap_or(0.0),
        total_protein_g: f64_field(raw, "totalProteinG").unwrap_or(0.0),
        total_carbs_g: f64_field(raw, "totalCarbsG").unwrap_or(0.0),
        total_fat_g: f64_field(raw, "totalFatG").unwrap_or(0.0),
        items,
    }
}

impl<UP, FL, WA, WL, FS, HC, L> MealAiService for Service<UP, FL, WA, WL, FS, HC, L>
where
    UP: UserProfileRepository,
    FL: FoodLogRepository,
    WA: WaterLogRepository,
    WL: WeightLogRepository,
    FS: FastingSessionRepository,
    HC: HealthCheckRepository,
    L: LLMClient,
{
    async fn parse_meal(&self, text: String) -> Result<MealBreakdown, CoreError> {
        let answer = self.llm_client.generate_text(meal_prompt(&text)).await?;

        if answer.trim().is_empty() {
            return Err(CoreError::UpstreamFailure {
                message: "model returned an empty response".to_string(),
                raw: answer,
            });
        }

        let body = strip_code_fences(&answer);
        let parsed: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("model response is not valid JSON: {}", e);
            CoreError::UpstreamFailure {
                message: format!("model response is not valid JSON: {e}"),
                raw: answer.clone(),
            }
        })?;

        Ok(breakdown_from_json(&parsed, &text))
    }

    async fn parse_and_log_meal(
        &self,
        user_id: Uuid,
        text: String,
    ) -> Result<LoggedMeal, CoreError> {
        self.user_profile_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let breakdown = self.parse_meal(text).await?;

        let log = FoodLog::new(FoodLogConfig {
            user_id,
            eaten_at: Utc::now(),
            description: breakdown.description.clone(),
            calories: breakdown.total_calories,
            protein_g: Some(breakdown.total_protein_g),
            carbs_g: Some(breakdown.total_carbs_g),
            fat_g: Some(breakdown.total_fat_g),
            sugar_g: None,
        });

        let log = self.food_log_repository.create(log).await?;

        Ok(LoggedMeal { log, breakdown })
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

    type TestService = Service<
        MockUserProfileRepository,
        MockFoodLogRepository,
        MockWaterLogRepository,
        MockWeightLogRepository,
        MockFastingSessionRepository,
        MockHealthCheckRepository,
        MockLLMClient,
    >;

    fn service_with_model(answer: &'static str) -> TestService {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .returning(move |_| Box::pin(std::future::ready(Ok(answer.to_string()))));
        Service::new(
            MockUserProfileRepository::new(),
            MockFoodLogRepository::new(),
            MockWaterLogRepository::new(),
            MockWeightLogRepository::new(),
            MockFastingSessionRepository::new(),
            MockHealthCheckRepository::new(),
            llm,
        )
    }

    const GOOD_ANSWER: &str = r#"{
        "description": "2 eggs and toast",
        "totalCalories": 320.0,
        "totalProteinG": 18.0,
        "totalCarbsG": 25.0,
        "totalFatG": 14.0,
        "items": [
            {"name": "eggs", "quantity": "2 large", "calories": 140.0,
             "proteinG": 12.0, "carbsG": 1.0, "fatG": 10.0},
            {"name": "toast", "quantity": "1 slice", "calories": 180.0,
             "proteinG": 6.0, "carbsG": 24.0, "fatG": 4.0}
        ]
    }"#;

    #[tokio::test]
    async fn parses_a_plain_json_answer() {
        let service = service_with_model(GOOD_ANSWER);

        let breakdown = service
            .parse_meal("2 eggs and toast".to_string())
            .await
            .unwrap();

        assert_eq!(breakdown.description, "2 eggs and toast");
        assert_eq!(breakdown.total_calories, 320.0);
        assert_eq!(breakdown.items.len(), 2);
        assert_eq!(breakdown.items[0].name.as_deref(), Some("eggs"));
        assert_eq!(breakdown.items[1].calories, Some(180.0));
    }

    #[tokio::test]
    async fn parses_an_answer_wrapped_in_code_fences() {
        let service = service_with_model(
            "```json\n{\"description\": \"apple\", \"totalCalories\": 95, \"totalProteinG\": 0.5, \"totalCarbsG\": 25, \"totalFatG\": 0.3, \"items\": []}\n```",
        );

        let breakdown = service.parse_meal("an apple".to_string()).await.unwrap();

        assert_eq!(breakdown.description, "apple");
        assert_eq!(breakdown.total_calories, 95.0);
        assert!(breakdown.items.is_empty());
    }

    #[tokio::test]
    async fn missing_fields_default_instead_of_failing() {
        let service = service_with_model(r#"{"items": [{"name": "mystery dish"}]}"#);

        let breakdown = service
            .parse_meal("something vague".to_string())
            .await
            .unwrap();

        assert_eq!(breakdown.description, "something vague");
        assert_eq!(breakdown.total_calories, 0.0);
        assert_eq!(breakdown.items[0].name.as_deref(), Some("mystery dish"));
        assert!(breakdown.items[0].calories.is_none());
    }

    #[tokio::test]
    async fn empty_answer_is_an_upstream_failure() {
        let service = service_with_model("   ");

        let result = service.parse_meal("lunch".to_string()).await;

        assert!(matches!(result, Err(CoreError::UpstreamFailure { .. })));
    }

    #[tokio::test]
    async fn non_json_answer_surfaces_the_raw_text() {
        let service = service_with_model("Sorry, I cannot help with that.");

        let result = service.parse_meal("lunch".to_string()).await;

        match result {
            Err(CoreError::UpstreamFailure { raw, .. }) => {
                assert!(raw.contains("Sorry, I cannot help"));
            }
            other => panic!("expected UpstreamFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn log_meal_persists_the_totals() {
        let user_id = Uuid::new_v4();

        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .returning(|_| Box::pin(std::future::ready(Ok(GOOD_ANSWER.to_string()))));

        let mut users = MockUserProfileRepository::new();
        let profile = UserProfile::new("test".to_string(), Some(30), Some(180.0), Some(80.0));
        users
            .expect_get_by_id()
            .returning(move |_| Box::pin(std::future::ready(Ok(Some(UserProfile { id: user_id, ..profile.clone() })))));

        let mut foods = MockFoodLogRepository::new();
        foods.expect_create().returning(|log| Box::pin(std::future::ready(Ok(log))));

        let service = Service::new(
            users,
            foods,
            MockWaterLogRepository::new(),
            MockWeightLogRepository::new(),
            MockFastingSessionRepository::new(),
            MockHealthCheckRepository::new(),
            llm,
        );

        let logged = service
            .parse_and_log_meal(user_id, "2 eggs and toast".to_string())
            .await
            .unwrap();

        assert_eq!(logged.log.user_id, user_id);
        assert_eq!(logged.log.calories, 320.0);
        assert_eq!(logged.log.protein_g, Some(18.0));
        assert_eq!(logged.log.description, "2 eggs and toast");
        assert_eq!(logged.breakdown.items.len(), 2);
    }

    #[tokio::test]
    async fn log_meal_for_unknown_user_is_not_found() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .returning(|_| Box::pin(std::future::ready(Ok(GOOD_ANSWER.to_string()))));

        let mut users = MockUserProfileRepository::new();
        users.expect_get_by_id().returning(|_| Box::pin(std::future::ready(Ok(None))));

        let service = Service::new(
            users,
            MockFoodLogRepository::new(),
            MockWaterLogRepository::new(),
            MockWeightLogRepository::new(),
            MockFastingSessionRepository::new(),
            MockHealthCheckRepository::new(),
            llm,
        );

        let result = service
            .parse_and_log_meal(Uuid::new_v4(), "lunch".to_string())
            .await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }
}
