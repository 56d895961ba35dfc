//! Brand naming policy
//!
//! Brand rules are never matched against page text here. They are rendered
//! into instruction text for the external reviewer, which decides whether a
//! variant appears.

use std::fs;
use std::path::Path;

use shared_types::BrandRule;
use thiserror::Error;
use tracing::{info, warn};

/// Closing line of the rendered policy block
pub const BRAND_FLAG_INSTRUCTION: &str =
    "When flagging, set type to \"brand\" or \"brand_inconsistency\" and suggest the correct form.";

#[derive(Error, Debug)]
pub enum BrandRulesError {
    #[error("Failed to read brand rules: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse brand rules: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, read-only set of brand rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandPolicy {
    rules: Vec<BrandRule>,
}

impl BrandPolicy {
    pub fn new(rules: Vec<BrandRule>) -> Self {
        Self { rules }
    }

    /// Parses a JSON array of rules
    pub fn from_json(json: &str) -> Result<Self, BrandRulesError> {
        let rules: Vec<BrandRule> = serde_json::from_str(json)?;
        Ok(Self::new(rules))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BrandRulesError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads rules from `path`, treating any failure as "no brand policy"
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(policy) => {
                info!(
                    "Loaded {} brand rule(s) from {}",
                    policy.len(),
                    path.display()
                );
                policy
            }
            Err(e) => {
                warn!("Brand policy disabled ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn rules(&self) -> &[BrandRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn render(&self) -> String {
        render(&self.rules)
    }
}

/// Renders rules as reviewer instructions. No rules, no section.
pub fn render(rules: &[BrandRule]) -> String {
    if rules.is_empty() {
        return String::new();
    }

    let mut lines = vec![String::new(), "Brand policies:".to_string()];
    for rule in rules {
        render_rule(rule, &mut lines);
    }
    lines.push(BRAND_FLAG_INSTRUCTION.to_string());
    lines.join("\n")
}

fn render_rule(rule: &BrandRule, lines: &mut Vec<String>) {
    let name = if rule.name.trim().is_empty() {
        "(brand)"
    } else {
        rule.name.as_str()
    };
    lines.push(format!("- {}:", name));

    if let Some(preferred) = rule.preferred.as_deref().filter(|p| !p.is_empty()) {
        lines.push(format!("  * Preferred: “{}”.", preferred));
    }
    if !rule.abbreviations.is_empty() {
        lines.push(format!(
            "  * Abbreviations allowed after first mention: {}.",
            rule.abbreviations.join(", ")
        ));
    }
    if !rule.legal_names.is_empty() {
        lines.push(format!(
            "  * Legal entity names (legal/quotes only): {}.",
            rule.legal_names.join(", ")
        ));
    }
    if !rule.disallow.is_empty() {
        lines.push(format!(
            "  * Treat as inconsistent/outdated in normal copy: {}.",
            rule.disallow.join(", ")
        ));
    }
}
