//! Metabolic target calculations. Everything here is pure and deterministic;
//! persistence and request plumbing live elsewhere.

use crate::domain::profile::entities::{ActivityLevel, Goal, GoalPace, Sex, UserProfile};

/// Mifflin-St Jeor resting energy estimate, rounded to the nearest kcal.
pub fn basal_metabolic_rate(age: i32, height_cm: f64, weight_kg: f64, sex: Sex) -> i32 {
    let sex_term = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    let bmr = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + sex_term;
    bmr.round() as i32
}

pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.20,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::High => 1.725,
        ActivityLevel::VeryHigh => 1.90,
    }
}

pub fn goal_delta(goal: Goal, pace: GoalPace) -> i32 {
    match goal {
        Goal::Maintain => 0,
        Goal::Lose => match pace {
            GoalPace::Mild => -250,
            GoalPace::Medium => -500,
            GoalPace::Aggressive => -750,
        },
        Goal::Gain => match pace {
            GoalPace::Mild => 250,
            GoalPace::Medium => 400,
            GoalPace::Aggressive => 600,
        },
    }
}

/// TDEE plus the goal adjustment, floored at 1200 kcal so malformed low
/// inputs cannot produce a dangerous target. No ceiling.
pub fn calorie_target(
    age: i32,
    height_cm: f64,
    weight_kg: f64,
    sex: Sex,
    level: ActivityLevel,
    goal: Goal,
    pace: GoalPace,
) -> i32 {
    let bmr = basal_metabolic_rate(age, height_cm, weight_kg, sex);
    let tdee = (f64::from(bmr) * activity_factor(level)).round() as i32;
    let target = tdee + goal_delta(goal, pace);

    target.max(1200)
}

/// 35 ml per kg, clamped to a sane [1500, 4500] ml range.
pub fn water_goal_ml(weight_kg: f64) -> i32 {
    let ml = (weight_kg * 35.0).round() as i32;
    ml.clamp(1500, 4500)
}

/// Grams of protein per day. 1.6 g/kg baseline, adjusted by goal and
/// activity, capped at 2.4 g/kg. Missing weight falls back to 120 g.
pub fn protein_target_g(
    weight_kg: Option<f64>,
    goal: Option<Goal>,
    level: Option<ActivityLevel>,
) -> i32 {
    let Some(kg) = weight_kg else {
        return 120;
    };

    let mut grams_per_kg: f64 = match goal {
        Some(Goal::Lose) => 2.0,
        Some(Goal::Gain) => 1.8,
        Some(Goal::Maintain) | None => 1.6,
    };

    if matches!(level, Some(ActivityLevel::High) | Some(ActivityLevel::VeryHigh)) {
        grams_per_kg += 0.2;
    }

    grams_per_kg = grams_per_kg.min(2.4);

    (kg * grams_per_kg).round() as i32
}

/// Daily sugar allowance in grams: 10% of calories (5% when losing) at
/// 4 kcal per gram. Missing calorie target falls back to 30 g.
pub fn sugar_limit_g(calorie_target_kcal: Option<i32>, goal: Option<Goal>) -> i32 {
    let Some(kcal) = calorie_target_kcal else {
        return 30;
    };

    let ratio = if goal == Some(Goal::Lose) { 0.05 } else { 0.10 };

    let sugar_kcal = f64::from(kcal) * ratio;
    (sugar_kcal / 4.0).round() as i32
}

/// Recomputes every target on the profile. Deliberately a no-op when age,
/// height or weight is missing: incomplete data leaves targets untouched
/// instead of erroring.
pub fn recalc_all(profile: &mut UserProfile) {
    let (Some(age), Some(height), Some(weight)) =
        (profile.age, profile.height_cm, profile.weight_kg)
    else {
        return;
    };

    let sex = profile.sex.unwrap_or(Sex::Male);
    let level = profile.activity_level.unwrap_or(ActivityLevel::Sedentary);
    let goal = profile.goal.unwrap_or(Goal::Maintain);
    let pace = profile.goal_pace.unwrap_or(GoalPace::Medium);

    let calorie = calorie_target(age, height, weight, sex, level, goal, pace);

    profile.calorie_target_kcal = Some(calorie);
    profile.water_goal_ml = Some(water_goal_ml(weight));
    profile.protein_target_g = Some(protein_target_g(
        Some(weight),
        profile.goal,
        profile.activity_level,
    ));
    profile.sugar_limit_g = Some(sugar_limit_g(Some(calorie), profile.goal));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_profile() -> UserProfile {
        let mut profile = UserProfile::new("test".to_string(), Some(30), Some(180.0), Some(80.0));
        profile.sex = Some(Sex::Male);
        profile.activity_level = Some(ActivityLevel::Moderate);
        profile.goal = Some(Goal::Lose);
        profile.goal_pace = Some(GoalPace::Medium);
        profile
    }

    #[test]
    fn bmr_matches_mifflin_st_jeor() {
        // 10*80 + 6.25*180 - 5*30 + 5 = 1805
        assert_eq!(basal_metabolic_rate(30, 180.0, 80.0, Sex::Male), 1805);
        // female variant: 10*60 + 6.25*165 - 5*25 - 161 = 1345.25 -> 1345
        assert_eq!(basal_metabolic_rate(25, 165.0, 60.0, Sex::Female), 1345);
    }

    #[test]
    fn calorie_target_reference_case() {
        // TDEE = round(1805 * 1.55) = 2798, lose/medium = -500 -> 2298
        let target = calorie_target(
            30,
            180.0,
            80.0,
            Sex::Male,
            ActivityLevel::Moderate,
            Goal::Lose,
            GoalPace::Medium,
        );
        assert_eq!(target, 2298);
    }

    #[test]
    fn calorie_target_never_drops_below_floor() {
        let target = calorie_target(
            90,
            120.0,
            30.0,
            Sex::Female,
            ActivityLevel::Sedentary,
            Goal::Lose,
            GoalPace::Aggressive,
        );
        assert_eq!(target, 1200);
    }

    #[test]
    fn water_goal_is_clamped() {
        assert_eq!(water_goal_ml(80.0), 2800);
        assert_eq!(water_goal_ml(20.0), 1500);
        assert_eq!(water_goal_ml(200.0), 4500);
    }

    #[test]
    fn protein_target_adjusts_for_goal_and_activity() {
        // lose + high activity: 2.0 + 0.2 = 2.2 g/kg
        assert_eq!(
            protein_target_g(Some(80.0), Some(Goal::Lose), Some(ActivityLevel::High)),
            176
        );
        // maintain, sedentary: 1.6 g/kg
        assert_eq!(
            protein_target_g(Some(80.0), Some(Goal::Maintain), Some(ActivityLevel::Sedentary)),
            128
        );
        // missing weight falls back to 120
        assert_eq!(protein_target_g(None, Some(Goal::Lose), None), 120);
    }

    #[test]
    fn protein_target_is_monotonic_in_weight() {
        let mut previous = 0;
        for kg in 1..=500 {
            let target =
                protein_target_g(Some(f64::from(kg)), Some(Goal::Gain), Some(ActivityLevel::High));
            assert!(target >= previous, "regression at {kg} kg");
            previous = target;
        }
    }

    #[test]
    fn sugar_limit_honors_lose_ratio_and_default() {
        // 10% of 2000 kcal / 4 = 50 g
        assert_eq!(sugar_limit_g(Some(2000), Some(Goal::Maintain)), 50);
        // 5% of 2000 kcal / 4 = 25 g
        assert_eq!(sugar_limit_g(Some(2000), Some(Goal::Lose)), 25);
        assert_eq!(sugar_limit_g(None, Some(Goal::Lose)), 30);
    }

    #[test]
    fn recalc_all_fills_every_target() {
        let mut profile = reference_profile();
        recalc_all(&mut profile);

        assert_eq!(profile.calorie_target_kcal, Some(2298));
        assert_eq!(profile.water_goal_ml, Some(2800));
        assert_eq!(profile.protein_target_g, Some(160)); // 2.0 g/kg * 80
        assert_eq!(profile.sugar_limit_g, Some(29)); // 2298 * 0.05 / 4
    }

    #[test]
    fn recalc_all_skips_incomplete_profiles() {
        let mut profile = reference_profile();
        profile.weight_kg = None;
        profile.calorie_target_kcal = Some(1234);

        recalc_all(&mut profile);

        // Targets are untouched when a body metric is absent.
        assert_eq!(profile.calorie_target_kcal, Some(1234));
        assert_eq!(profile.water_goal_ml, None);
    }
}
