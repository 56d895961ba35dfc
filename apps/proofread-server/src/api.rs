//! API handlers for the proofread server
//!
//! Provides REST endpoints for:
//! - Brand rule listing
//! - Reviewer instruction text
//! - Dry-run proofreading of already extracted pages

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use proofread_engine::report::group_by_page;
use shared_types::{BrandRule, Finding, Page};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub time: String,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "proofread-server",
        version: env!("CARGO_PKG_VERSION"),
        time: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    })
}

/// Brand rule list response
#[derive(Serialize)]
pub struct BrandRulesResponse {
    pub success: bool,
    pub rules: Vec<BrandRule>,
    pub count: usize,
}

/// Handler: GET /api/brand-rules
pub async fn handle_brand_rules(State(state): State<AppState>) -> Json<BrandRulesResponse> {
    let rules = state.engine.brand_policy().rules().to_vec();
    let count = rules.len();

    Json(BrandRulesResponse {
        success: true,
        rules,
        count,
    })
}

/// Reviewer instruction response
#[derive(Serialize)]
pub struct InstructionsResponse {
    pub success: bool,
    /// Full system instructions sent to the AI reviewer
    pub system: String,
    /// Brand policy section alone (empty when no rules are loaded)
    pub brand_policy: String,
}

/// Handler: GET /api/instructions
pub async fn handle_instructions(State(state): State<AppState>) -> Json<InstructionsResponse> {
    Json(InstructionsResponse {
        success: true,
        system: state.engine.system_instructions(),
        brand_policy: state.engine.brand_policy().render(),
    })
}

/// One extracted page
#[derive(Deserialize)]
pub struct PageInput {
    /// Normalized page text
    pub text: String,

    /// Whitespace-preserving text, if the extractor produced it
    #[serde(default)]
    pub raw_text: Option<String>,
}

/// Dry-run proofread request
#[derive(Deserialize)]
pub struct ProofreadRequest {
    /// Pages in document order
    pub pages: Vec<PageInput>,

    /// Raw reply from the AI reviewer, decoded here
    #[serde(default)]
    pub ai_output: Option<String>,
}

/// Dry-run proofread response
#[derive(Serialize)]
pub struct ProofreadResponse {
    pub success: bool,
    pub issues: Vec<Finding>,
    pub issue_count: usize,
    pub pages: Vec<PageIssueCount>,
}

/// Number of in-range issues anchored to a page
#[derive(Serialize)]
pub struct PageIssueCount {
    pub page: u32,
    pub issue_count: usize,
}

/// Handler: POST /api/proofread-dryrun
pub async fn handle_proofread_dryrun(
    State(state): State<AppState>,
    Json(req): Json<ProofreadRequest>,
) -> Result<Json<ProofreadResponse>, ServerError> {
    info!(
        "Proofread dry run: pages={}, ai_output={}",
        req.pages.len(),
        req.ai_output.is_some()
    );

    if req.pages.is_empty() {
        return Err(ServerError::InvalidRequest(
            "At least one page is required".to_string(),
        ));
    }
    if req.pages.len() > state.max_pages {
        return Err(ServerError::TooManyPages {
            count: req.pages.len(),
            limit: state.max_pages,
        });
    }

    let pages = Page::sequence(req.pages.into_iter().map(|p| (p.text, p.raw_text)));
    let issues = state.engine.proofread(&pages, req.ai_output.as_deref());
    debug!("Proofread produced {} issue(s)", issues.len());

    let grouped = group_by_page(&issues, pages.len() as u32);
    let page_counts = pages
        .iter()
        .map(|p| PageIssueCount {
            page: p.page_number,
            issue_count: grouped.get(&p.page_number).map_or(0, Vec::len),
        })
        .collect();

    let issue_count = issues.len();
    Ok(Json(ProofreadResponse {
        success: true,
        issues,
        issue_count,
        pages: page_counts,
    }))
}
