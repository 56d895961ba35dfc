pub mod aggregate;
pub mod ai;
pub mod brand;
pub mod extractors;
pub mod patterns;
pub mod prompt;
pub mod report;
pub mod rules;

pub use aggregate::aggregate;
pub use ai::DecodeError;
pub use brand::{BrandPolicy, BrandRulesError};
pub use extractors::{excerpt, truncate};

use shared_types::{Finding, Page};

/// ProofreadEngine entry point
#[derive(Debug, Clone, Default)]
pub struct ProofreadEngine {
    policy: BrandPolicy,
}

impl ProofreadEngine {
    pub fn new(policy: BrandPolicy) -> Self {
        Self { policy }
    }

    pub fn brand_policy(&self) -> &BrandPolicy {
        &self.policy
    }

    /// Deterministic spacing findings for a page batch
    pub fn scan(&self, pages: &[Page]) -> Vec<Finding> {
        rules::check_pages(pages)
    }

    /// System instructions for the AI reviewer, brand policy included
    pub fn system_instructions(&self) -> String {
        prompt::system_instructions(&self.policy)
    }

    pub fn user_payload(&self, pages: &[Page]) -> String {
        prompt::user_payload(pages)
    }

    /// AI findings (decoded from the raw reply, if any) followed by the
    /// spacing findings. An undecodable reply contributes nothing.
    pub fn proofread(&self, pages: &[Page], ai_reply: Option<&str>) -> Vec<Finding> {
        let ai_findings = ai_reply
            .map(ai::decode_issues_or_empty)
            .unwrap_or_default();
        aggregate([ai_findings, self.scan(pages)])
    }
}
