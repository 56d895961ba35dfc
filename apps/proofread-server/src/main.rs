//! Proofread Server
//!
//! Serves the deterministic proofreading engine over HTTP. Pages arrive
//! already extracted and the AI reviewer's reply arrives as raw text; the
//! server scans the pages for spacing defects, decodes the reply, and returns
//! both as one ordered issue list.
//!
//! ## Endpoints
//!
//! - `GET  /health`
//! - `GET  /api/brand-rules`
//! - `GET  /api/instructions`
//! - `POST /api/proofread-dryrun`

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use proofread_engine::{BrandPolicy, ProofreadEngine};

mod api;
mod error;

use api::{handle_brand_rules, handle_health, handle_instructions, handle_proofread_dryrun};

/// Command-line arguments for the proofread server
#[derive(Parser, Debug)]
#[command(name = "proofread-server")]
#[command(about = "Proofreading server for spacing checks and brand policy")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5050")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Brand rules file (JSON array); unreadable files disable the brand policy
    #[arg(long, default_value = "brand_rules.json")]
    brand_rules: PathBuf,

    /// Maximum pages accepted per request
    #[arg(long, default_value = "500")]
    max_pages: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ProofreadEngine>,
    pub max_pages: usize,
}

/// Router with every endpoint, without transport middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/brand-rules", get(handle_brand_rules))
        .route("/api/instructions", get(handle_instructions))
        .route("/api/proofread-dryrun", post(handle_proofread_dryrun))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting proofread server on {}:{}", args.host, args.port);

    // Brand rules are read once and shared read-only
    let policy = BrandPolicy::load_or_empty(&args.brand_rules);
    let state = AppState {
        engine: Arc::new(ProofreadEngine::new(policy)),
        max_pages: args.max_pages,
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Max pages per request: {}", args.max_pages);

    axum::serve(listener, app).await?;

    Ok(())
}
