//! Consumer-side helpers for annotation and summary output
//!
//! Findings are not validated when aggregated. These helpers are where an
//! out-of-range page gets dropped.

use std::collections::BTreeMap;

use serde::Serialize;
use shared_types::Finding;

use crate::extractors::excerpt::truncate;

/// Character limits for summary cells: page, type, excerpt, problem, suggestion
pub const SUMMARY_CELL_LIMITS: [usize; 5] = [4, 10, 120, 100, 100];

/// Findings keyed by page number, arrival order kept within each page.
/// Findings pointing at page 0 or past `page_count` are left out.
pub fn group_by_page(findings: &[Finding], page_count: u32) -> BTreeMap<u32, Vec<&Finding>> {
    let mut per_page: BTreeMap<u32, Vec<&Finding>> = BTreeMap::new();
    for finding in findings {
        if finding.page < 1 || finding.page > page_count {
            continue;
        }
        per_page.entry(finding.page).or_default().push(finding);
    }
    per_page
}

/// Text of the sticky note attached next to a highlighted excerpt
pub fn annotation_note(finding: &Finding) -> String {
    let kind = match finding.kind.as_str().trim() {
        "" => "issue",
        kind => kind,
    };
    format!(
        "[{}] {}\nSuggestion: {}",
        kind,
        finding.problem.trim(),
        finding.suggestion.trim()
    )
    .trim()
    .to_string()
}

/// One row of the proofreading summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub page: String,
    pub kind: String,
    pub excerpt: String,
    pub problem: String,
    pub suggestion: String,
}

pub fn summary_rows(findings: &[Finding]) -> Vec<SummaryRow> {
    let [page, kind, excerpt, problem, suggestion] = SUMMARY_CELL_LIMITS;
    findings
        .iter()
        .map(|f| SummaryRow {
            page: cell(&f.page.to_string(), page),
            kind: cell(f.kind.as_str(), kind),
            excerpt: cell(&f.sentence_or_excerpt, excerpt),
            problem: cell(&f.problem, problem),
            suggestion: cell(&f.suggestion, suggestion),
        })
        .collect()
}

fn cell(text: &str, limit: usize) -> String {
    truncate(&text.replace('\n', " "), limit)
}
