use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalPace {
    Mild,
    Medium,
    Aggressive,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "MALE",
            Sex::Female => "FEMALE",
        }
    }
}

impl FromStr for Sex {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Sex::Male),
            "FEMALE" => Ok(Sex::Female),
            _ => Err(()),
        }
    }
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "SEDENTARY",
            ActivityLevel::Light => "LIGHT",
            ActivityLevel::Moderate => "MODERATE",
            ActivityLevel::High => "HIGH",
            ActivityLevel::VeryHigh => "VERY_HIGH",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SEDENTARY" => Ok(ActivityLevel::Sedentary),
            "LIGHT" => Ok(ActivityLevel::Light),
            "MODERATE" => Ok(ActivityLevel::Moderate),
            "HIGH" => Ok(ActivityLevel::High),
            "VERY_HIGH" => Ok(ActivityLevel::VeryHigh),
            _ => Err(()),
        }
    }
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "LOSE",
            Goal::Maintain => "MAINTAIN",
            Goal::Gain => "GAIN",
        }
    }
}

impl FromStr for Goal {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOSE" => Ok(Goal::Lose),
            "MAINTAIN" => Ok(Goal::Maintain),
            "GAIN" => Ok(Goal::Gain),
            _ => Err(()),
        }
    }
}

impl GoalPace {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalPace::Mild => "MILD",
            GoalPace::Medium => "MEDIUM",
            GoalPace::Aggressive => "AGGRESSIVE",
        }
    }
}

impl FromStr for GoalPace {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MILD" => Ok(GoalPace::Mild),
            "MEDIUM" => Ok(GoalPace::Medium),
            "AGGRESSIVE" => Ok(GoalPace::Aggressive),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub sex: Option<Sex>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
    pub goal_pace: Option<GoalPace>,
    pub calorie_target_kcal: Option<i32>,
    pub protein_target_g: Option<i32>,
    pub sugar_limit_g: Option<i32>,
    pub water_goal_ml: Option<i32>,
    pub fasting_default_hours: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(
        name: String,
        age: Option<i32>,
        height_cm: Option<f64>,
        weight_kg: Option<f64>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            age,
            height_cm,
            weight_kg,
            sex: None,
            activity_level: None,
            goal: None,
            goal_pace: None,
            calorie_target_kcal: None,
            protein_target_g: None,
            sugar_limit_g: None,
            water_goal_ml: None,
            fasting_default_hours: None,
            created_at: now,
            updated_at: now,
        }
    }
}
