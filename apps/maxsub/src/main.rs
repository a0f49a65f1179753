//! # maxsub - Maximum Subarray Server
//!
//! The main binary for the maxsub run-merge solver.
//!
//! This application provides:
//! - CLI interface for one-shot solves over inline values or files
//! - HTTP JSON API server (axum-based)
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                apps/maxsub (THE BINARY)              │
//! │                                                      │
//! │    ┌─────────────┐            ┌─────────────┐        │
//! │    │     CLI     │            │  HTTP API   │        │
//! │    │   (clap)    │            │   (axum)    │        │
//! │    └──────┬──────┘            └──────┬──────┘        │
//! │           └─────────────┬────────────┘               │
//! │                         ▼                            │
//! │                 ┌───────────────┐                    │
//! │                 │  maxsub-core  │                    │
//! │                 │  (THE LOGIC)  │                    │
//! │                 └───────────────┘                    │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # One-shot solves
//! maxsub solve -- -2 1 -3 4 -1 2 1 -5 4
//! maxsub gap 3 -1 7
//! maxsub solve -f values.json -t json --json-mode
//!
//! # Start the HTTP server
//! maxsub serve --host 0.0.0.0 --port 8080
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // MAXSUB_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr so stdout carries only results.
    let log_format = std::env::var("MAXSUB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "maxsub=debug,maxsub_core=debug,tower_http=debug"
    } else {
        "maxsub=info,tower_http=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
