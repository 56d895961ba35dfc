//! Decoding of the AI reviewer's reply
//!
//! The reply is expected to be `{ "issues": [ ... ] }`, possibly wrapped in a
//! Markdown code fence. Decoding is the only place the raw reply is touched;
//! callers get either findings or a [`DecodeError`] they can map to "no AI
//! findings".

use serde_json::{Map, Value};
use shared_types::{Finding, FindingKind};
use thiserror::Error;
use tracing::warn;

use crate::extractors::excerpt::truncate;

/// Upper bound on a decoded excerpt, in characters
pub const MAX_EXCERPT_CHARS: usize = 300;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("AI response was empty")]
    Empty,

    #[error("AI response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("AI response has no `issues` array")]
    MissingIssues,
}

/// Parses the reviewer reply into findings
pub fn decode_issues(raw: &str) -> Result<Vec<Finding>, DecodeError> {
    let text = strip_code_fences(raw);
    if text.is_empty() {
        return Err(DecodeError::Empty);
    }

    let value: Value = serde_json::from_str(&text)?;
    let issues = value
        .get("issues")
        .and_then(Value::as_array)
        .ok_or(DecodeError::MissingIssues)?;

    Ok(issues
        .iter()
        .filter_map(Value::as_object)
        .map(finding_from_object)
        .collect())
}

/// Like [`decode_issues`], but a bad reply just means no AI findings
pub fn decode_issues_or_empty(raw: &str) -> Vec<Finding> {
    decode_issues(raw).unwrap_or_else(|e| {
        warn!("Ignoring AI response: {}", e);
        Vec::new()
    })
}

fn strip_code_fences(raw: &str) -> String {
    let text = raw.trim();
    if !text.starts_with("```") {
        return text.to_string();
    }
    text.lines()
        .filter(|line| !line.trim().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn finding_from_object(obj: &Map<String, Value>) -> Finding {
    let kind = match string_field(obj, "type") {
        tag if tag.trim().is_empty() => FindingKind::Other("issue".to_string()),
        tag => FindingKind::from(tag.trim().to_string()),
    };

    Finding {
        kind,
        page: page_field(obj.get("page")),
        sentence_or_excerpt: truncate(&string_field(obj, "sentence_or_excerpt"), MAX_EXCERPT_CHARS),
        problem: string_field(obj, "problem"),
        suggestion: string_field(obj, "suggestion"),
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Integer or numeric string; anything else is page 0 (never a real page)
fn page_field(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
