use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    fasting::ports::FastingSessionRepository,
    health::ports::HealthCheckRepository,
    meal_ai::ports::LLMClient,
    profile::{ports::UserProfileRepository, value_objects::NutritionTargets},
    stats::{
        buckets::{calories_by_hour, daily_totals, day_start_utc, local_day, parse_timezone},
        ports::StatsService,
        value_objects::{DailyProgress, DailyTotalsPoint, HourCaloriesPoint, TodaySummary},
    },
    tracking::ports::{FoodLogRepository, WaterLogRepository, WeightLogRepository},
};

pub const DEFAULT_WATER_GOAL_ML: i32 = 2000;

impl<UP, FL, WA, WL, FS, HC, L> StatsService for Service<UP, FL, WA, WL, FS, HC, L>
where
    UP: UserProfileRepository,
    FL: FoodLogRepository,
    WA: WaterLogRepository,
    WL: WeightLogRepository,
    FS: FastingSessionRepository,
    HC: HealthCheckRepository,
    L: LLMClient,
{
    async fn daily_totals(
        &self,
        user_id: Uuid,
        days: u32,
        tz: Option<String>,
    ) -> Result<Vec<DailyTotalsPoint>, CoreError> {
        let zone = parse_timezone(tz.as_deref())?;

        let to = Utc::now();
        let from = to - Duration::days(i64::from(days));

        let foods = self.food_log_repository.find_between(user_id, from, to).await?;
        let waters = self.water_log_repository.find_between(user_id, from, to).await?;

        Ok(daily_totals(&foods, &waters, zone, days, to))
    }

    async fn calories_by_hour(
        &self,
        user_id: Uuid,
        days: u32,
        tz: Option<String>,
    ) -> Result<Vec<HourCaloriesPoint>, CoreError> {
        let zone = parse_timezone(tz.as_deref())?;

        let to = Utc::now();
        let from = to - Duration::days(i64::from(days));

        let foods = self.food_log_repository.find_between(user_id, from, to).await?;

        Ok(calories_by_hour(&foods, zone))
    }

    async fn today_summary(
        &self,
        user_id: Uuid,
        tz: Option<String>,
    ) -> Result<TodaySummary, CoreError> {
        let profile = self
            .user_profile_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let zone = parse_timezone(tz.as_deref())?;
        let now = Utc::now();
        let today = local_day(now, zone);
        let from = day_start_utc(today, zone);

        let calories = self
            .food_log_repository
            .sum_calories_between(user_id, from, now)
            .await?;
        let protein = self
            .food_log_repository
            .sum_protein_between(user_id, from, now)
            .await?;
        let sugar = self
            .food_log_repository
            .sum_sugar_between(user_id, from, now)
            .await?;
        let water = self
            .water_log_repository
            .sum_water_between(user_id, from, now)
            .await?;

        let targets = NutritionTargets {
            calorie_target_kcal: profile.calorie_target_kcal,
            protein_target_g: profile.protein_target_g,
            sugar_limit_g: profile.sugar_limit_g,
            water_goal_ml: profile.water_goal_ml.unwrap_or(DEFAULT_WATER_GOAL_ML),
        };

        let consumed = DailyProgress {
            calories,
            protein_g: protein,
            sugar_g: sugar,
            water_ml: water,
        };

        let open = self.fasting_session_repository.find_open(user_id).await?;

        Ok(TodaySummary {
            user_id,
            date: today.format("%Y-%m-%d").to_string(),
            targets,
            consumed,
            fasting_active: open.is_some(),
            fasting_protocol: open.as_ref().map(|s| s.protocol.clone()),
            active_fasting_id: open.map(|s| s.id),
        })
    }
}
