/// Water guidance by remaining ml against the goal.
pub fn water_message(goal_ml: i64, consumed_ml: i64) -> String {
    let remaining = (goal_ml - consumed_ml).max(0);
    if remaining == 0 {
        return "Water: goal met for today. Keep the pace.".to_string();
    }
    if remaining <= 300 {
        return format!("Water: almost at the goal ({remaining} ml to go). One more glass.");
    }
    format!("Water: {remaining} ml remaining of the {goal_ml} ml goal.")
}

/// Calorie guidance by consumed-so-far. No goal comparison here; that lives
/// in the summary view.
pub fn calories_message(consumed_kcal: f64) -> String {
    if consumed_kcal == 0.0 {
        return "Food: no calories logged yet today. If you already ate, add an entry.".to_string();
    }
    let rounded = consumed_kcal.round() as i64;
    if consumed_kcal < 400.0 {
        return format!("Food: {rounded} kcal so far. If a meal is coming, favor protein and fiber.");
    }
    format!("Food: {rounded} kcal logged today.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_tiers() {
        assert!(water_message(2000, 2000).contains("goal met"));
        assert!(water_message(2000, 2500).contains("goal met"));
        let almost = water_message(2000, 1700);
        assert!(almost.contains("almost"));
        assert!(almost.contains("300 ml"));
        let far = water_message(2000, 1000);
        assert!(far.contains("1000 ml remaining"));
        assert!(far.contains("2000 ml goal"));
    }

    #[test]
    fn calorie_tiers() {
        assert!(calories_message(0.0).contains("no calories logged"));
        assert!(calories_message(399.6).contains("protein and fiber"));
        assert!(calories_message(400.0).contains("400 kcal logged today"));
    }
}
