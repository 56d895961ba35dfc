//! Instruction text for the external AI reviewer

use serde_json::json;
use shared_types::Page;

use crate::brand::BrandPolicy;

/// Fixed reviewer instructions. Brand rules are appended at runtime.
pub const BASE_INSTRUCTIONS: &str = r#"
You are a professional proofreader. Return ONLY a valid JSON object with an `issues` array.

Check for:
- Incorrect punctuation (periods where commas belong, misused semicolons, doubled punctuation)
- Extra or missing spaces
- Misspelled words
- Missing punctuation
- Inconsistent capitalization
- Line breaks that split names or phrases
- Company and brand name formatting

Pay special attention to:
- Dates (e.g., "Monday. September 1st" should read "Monday, September 1st")
- Comma and period swaps
- Line breaks that disrupt flow
- Extra spaces

Output rules:
- Return only JSON (no prose, markdown, or code fences).
- Each issue MUST include: type, page, sentence_or_excerpt, problem, suggestion.
- `page` must be a 1-based page number from the input.
- Keep `sentence_or_excerpt` concise (300 characters at most) and quote the source exactly when possible.
- If a sentence has several problems, report each one separately.
- Suggested fixes must be specific and ready to apply.
"#;

/// Base instructions followed by the rendered brand policy, if any
pub fn system_instructions(policy: &BrandPolicy) -> String {
    let base = BASE_INSTRUCTIONS.trim();
    let brand = policy.render();
    if brand.is_empty() {
        base.to_string()
    } else {
        format!("{}{}", base, brand)
    }
}

/// User message listing each page's normalized text
pub fn user_payload(pages: &[Page]) -> String {
    let payload: Vec<_> = pages
        .iter()
        .map(|p| json!({ "page": p.page_number, "text": p.text }))
        .collect();
    format!("Pages:\n{}", serde_json::Value::Array(payload))
}
