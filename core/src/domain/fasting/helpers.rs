use crate::domain::fasting::entities::DEFAULT_PROTOCOL;

/// Protocol-aware guidance for an ongoing fast. Five bands by elapsed
/// minutes: [0,60), [60,480), [480,720), [720,960), [960,∞).
pub fn fasting_suggestion(protocol: Option<&str>, minutes_fasted: i64) -> String {
    let p = match protocol {
        Some(p) if !p.trim().is_empty() => p,
        _ => DEFAULT_PROTOCOL,
    };

    if minutes_fasted < 60 {
        return format!("Fasting ({p}): good start. Stay hydrated and avoid calories.");
    }
    if minutes_fasted < 8 * 60 {
        return format!(
            "Fasting ({p}): going well. Prioritize hydration; lower training intensity if you need to."
        );
    }
    if minutes_fasted < 12 * 60 {
        return format!(
            "Fasting ({p}): common window. Sparkling water or an infusion can help with hunger."
        );
    }
    if minutes_fasted < 16 * 60 {
        return format!(
            "Fasting ({p}): close to 16h. When you break it, start with something light and protein-first."
        );
    }
    format!(
        "Fasting ({p}): long window. When you break it, avoid a binge: protein, fiber and healthy fat."
    )
}
