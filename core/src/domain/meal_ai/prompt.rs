/// Fixed instruction template sent to the text-generation service. The
/// totals-match-items expectation is a prompt-level instruction only; the
/// parser never verifies it.
pub fn meal_prompt(text: &str) -> String {
    // Double quotes in user text would break the quoted segment below.
    let sanitized = text.replace('"', "'");

    format!(
        r#"You are a nutrition assistant.
Convert the user's free-text meal into a STRICT JSON object and output ONLY JSON (no markdown, no code fences, no commentary).

Schema:
{{
  "description": string,
  "totalCalories": number,
  "totalProteinG": number,
  "totalCarbsG": number,
  "totalFatG": number,
  "items": [
    {{
      "name": string,
      "quantity": string,
      "calories": number,
      "proteinG": number,
      "carbsG": number,
      "fatG": number
    }}
  ]
}}

Rules:
- If quantities are missing, make reasonable assumptions and set quantity as a human-friendly string.
- Totals must approximately match the sum of items (rounding OK).
- Do not add extra keys.

User meal text: "{sanitized}"
"#
    )
}
