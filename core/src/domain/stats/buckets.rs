//! Calendar bucketing of timestamped events. Pure folds over event slices;
//! fetching the window is the repository's job.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use std::collections::HashMap;

use crate::domain::{
    common::entities::app_errors::CoreError,
    stats::value_objects::{DailyTotalsPoint, HourCaloriesPoint},
    tracking::entities::{FoodLog, WaterLog},
};

pub const DEFAULT_TIMEZONE: &str = "Europe/Madrid";

pub fn parse_timezone(tz: Option<&str>) -> Result<Tz, CoreError> {
    let name = tz.unwrap_or(DEFAULT_TIMEZONE);
    name.parse::<Tz>()
        .map_err(|_| CoreError::Validation(format!("unknown timezone: {name}")))
}

/// Calendar day of `at` as seen from `tz`.
pub fn local_day(at: DateTime<Utc>, tz: Tz) -> NaiveDate {
    at.with_timezone(&tz).date_naive()
}

/// Hour of day (0-23) of `at` as seen from `tz`.
pub fn local_hour(at: DateTime<Utc>, tz: Tz) -> u32 {
    at.with_timezone(&tz).hour()
}

/// Instant at which `day` begins in `tz`. Falls back to the UTC reading of
/// local midnight when a DST gap swallows it.
pub fn day_start_utc(day: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let midnight = day.and_time(chrono::NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
        .with_timezone(&Utc)
}

/// Folds food and water events into one point per calendar day over the
/// trailing `days` ending today (in `tz`), inclusive. Days without events
/// are zero-filled. Sums are order-independent and match the naive per-day
/// totals of the inputs.
pub fn daily_totals(
    foods: &[FoodLog],
    waters: &[WaterLog],
    tz: Tz,
    days: u32,
    now: DateTime<Utc>,
) -> Vec<DailyTotalsPoint> {
    let mut calories_by_day: HashMap<NaiveDate, f64> = HashMap::new();
    for food in foods {
        *calories_by_day.entry(local_day(food.eaten_at, tz)).or_default() += food.calories;
    }

    let mut water_by_day: HashMap<NaiveDate, i64> = HashMap::new();
    for water in waters {
        *water_by_day.entry(local_day(water.drank_at, tz)).or_default() += i64::from(water.ml);
    }

    let end = local_day(now, tz);
    let start = end - Duration::days(i64::from(days.max(1)) - 1);

    let mut out = Vec::with_capacity(days as usize);
    let mut day = start;
    while day <= end {
        out.push(DailyTotalsPoint {
            date: day.format("%Y-%m-%d").to_string(),
            calories: calories_by_day.get(&day).copied().unwrap_or(0.0),
            water_ml: water_by_day.get(&day).copied().unwrap_or(0),
        });
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    out
}

/// Sums calories into 24 hour-of-day buckets ("what time of day do you
/// usually eat"), each event attributed to exactly one bucket.
pub fn calories_by_hour(foods: &[FoodLog], tz: Tz) -> Vec<HourCaloriesPoint> {
    let mut buckets = [0.0_f64; 24];
    for food in foods {
        buckets[local_hour(food.eaten_at, tz) as usize] += food.calories;
    }

    buckets
        .iter()
        .enumerate()
        .map(|(hour, calories)| HourCaloriesPoint {
            hour: hour as u32,
            calories: *calories,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tracking::entities::{FoodLogConfig, WaterLog};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn food(user_id: Uuid, eaten_at: DateTime<Utc>, calories: f64) -> FoodLog {
        FoodLog::new(FoodLogConfig {
            user_id,
            eaten_at,
            description: "test meal".to_string(),
            calories,
            protein_g: None,
            carbs_g: None,
            fat_g: None,
            sugar_g: None,
        })
    }

    #[test]
    fn parse_timezone_defaults_and_rejects_garbage() {
        assert_eq!(parse_timezone(None).unwrap().name(), DEFAULT_TIMEZONE);
        assert_eq!(parse_timezone(Some("UTC")).unwrap().name(), "UTC");
        assert!(matches!(
            parse_timezone(Some("Mars/Olympus")),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn daily_totals_zero_fills_every_day_in_range() {
        let tz: Tz = "UTC".parse().unwrap();
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();

        let points = daily_totals(&[], &[], tz, 7, now);

        assert_eq!(points.len(), 7);
        assert_eq!(points.first().unwrap().date, "2025-03-04");
        assert_eq!(points.last().unwrap().date, "2025-03-10");
        assert!(points.iter().all(|p| p.calories == 0.0 && p.water_ml == 0));
    }

    #[test]
    fn daily_totals_match_naive_sums() {
        let tz: Tz = "UTC".parse().unwrap();
        let user = Uuid::new_v4();
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 23, 0, 0).unwrap();

        let foods = vec![
            food(user, Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap(), 300.0),
            food(user, Utc.with_ymd_and_hms(2025, 3, 10, 20, 0, 0).unwrap(), 700.0),
            food(user, Utc.with_ymd_and_hms(2025, 3, 9, 13, 0, 0).unwrap(), 450.0),
        ];
        let waters = vec![
            WaterLog::new(user, Utc.with_ymd_and_hms(2025, 3, 9, 9, 0, 0).unwrap(), 500),
            WaterLog::new(user, Utc.with_ymd_and_hms(2025, 3, 9, 18, 0, 0).unwrap(), 250),
        ];

        let points = daily_totals(&foods, &waters, tz, 3, now);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, "2025-03-08");
        assert_eq!(points[0].calories, 0.0);
        assert_eq!(points[1].calories, 450.0);
        assert_eq!(points[1].water_ml, 750);
        assert_eq!(points[2].calories, 1000.0);

        let bucketed: f64 = points.iter().map(|p| p.calories).sum();
        let naive: f64 = foods.iter().map(|f| f.calories).sum();
        assert_eq!(bucketed, naive);
    }

    #[test]
    fn daily_totals_respect_the_requested_timezone() {
        // 23:30 UTC on March 9 is already March 10 in Madrid (UTC+1).
        let tz: Tz = "Europe/Madrid".parse().unwrap();
        let user = Uuid::new_v4();
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();

        let foods = vec![food(
            user,
            Utc.with_ymd_and_hms(2025, 3, 9, 23, 30, 0).unwrap(),
            500.0,
        )];

        let points = daily_totals(&foods, &[], tz, 2, now);
        assert_eq!(points[0].date, "2025-03-09");
        assert_eq!(points[0].calories, 0.0);
        assert_eq!(points[1].date, "2025-03-10");
        assert_eq!(points[1].calories, 500.0);
    }

    #[test]
    fn hour_buckets_attribute_each_event_exactly_once() {
        let tz: Tz = "UTC".parse().unwrap();
        let user = Uuid::new_v4();

        let foods = vec![
            food(user, Utc.with_ymd_and_hms(2025, 3, 10, 0, 5, 0).unwrap(), 100.0),
            food(user, Utc.with_ymd_and_hms(2025, 3, 10, 13, 0, 0).unwrap(), 600.0),
            food(user, Utc.with_ymd_and_hms(2025, 3, 11, 13, 45, 0).unwrap(), 400.0),
            food(user, Utc.with_ymd_and_hms(2025, 3, 10, 23, 59, 0).unwrap(), 200.0),
        ];

        let points = calories_by_hour(&foods, tz);

        assert_eq!(points.len(), 24);
        assert_eq!(points[0].calories, 100.0);
        assert_eq!(points[13].calories, 1000.0);
        assert_eq!(points[23].calories, 200.0);

        let bucketed: f64 = points.iter().map(|p| p.calories).sum();
        let naive: f64 = foods.iter().map(|f| f.calories).sum();
        assert_eq!(bucketed, naive);
    }

    #[test]
    fn hour_buckets_shift_with_timezone() {
        let tz: Tz = "Europe/Madrid".parse().unwrap();
        let user = Uuid::new_v4();

        // 12:00 UTC in winter is 13:00 in Madrid.
        let foods = vec![food(
            user,
            Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap(),
            300.0,
        )];

        let points = calories_by_hour(&foods, tz);
        assert_eq!(points[13].calories, 300.0);
        assert_eq!(points[12].calories, 0.0);
    }
}
