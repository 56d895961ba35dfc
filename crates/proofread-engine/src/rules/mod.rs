//! Deterministic spacing checks
//!
//! Pages are scanned in input order. Within a page each line gets the five
//! line checks (see [`spacing::check_line`]), then the whole page gets the
//! Unicode space check.

pub mod spacing;
pub mod unicode_spaces;

use shared_types::{Finding, Page};
use tracing::debug;

pub use spacing::check_line;
pub use unicode_spaces::check_unicode_spaces;

/// All spacing findings for one page
pub fn check_page(page: &Page) -> Vec<Finding> {
    let text = page.scan_text();
    let mut findings = Vec::new();

    for line in text.lines() {
        findings.extend(check_line(line, page.page_number));
    }
    findings.extend(check_unicode_spaces(text, page.page_number));

    debug!(
        "Spacing scan: page={}, findings={}",
        page.page_number,
        findings.len()
    );
    findings
}

/// All spacing findings for a page batch, page by page
pub fn check_pages(pages: &[Page]) -> Vec<Finding> {
    pages.iter().flat_map(check_page).collect()
}
