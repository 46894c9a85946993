use regex::Regex;

/// Removes an enclosing fenced code block (```json ... ```) the model may
/// wrap around the JSON body despite the prompt's instructions.
pub fn strip_code_fences(s: &str) -> String {
    let mut t = s.trim().to_string();

    if t.starts_with("```") {
        if let Ok(opening) = Regex::new(r"^```[a-zA-Z]*\s*") {
            t = opening.replace(&t, "").to_string();
        }
        if let Ok(closing) = Regex::new(r"\s*```\s*$") {
            t = closing.replace(&t, "").to_string();
        }
    }

    t.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn strips_bare_fence() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn leaves_plain_json_alone() {
        assert_eq!(strip_code_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }
}
