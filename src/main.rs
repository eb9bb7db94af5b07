//! # Headline Digest
//!
//! A headline aggregation pipeline that pulls link listings from configured
//! web pages and Atom feeds, normalizes them into uniform headline records,
//! and writes a JSON snapshot plus a styled HTML digest.
//!
//! ## Features
//!
//! - Config-driven source list (`sources.yaml`) mixing CSS-selector web
//!   scraping with Atom feed parsing
//! - Per-source URL deduplication with first-seen order preserved
//! - Fail-soft fetching: a broken feed or an unreachable page never aborts
//!   the run
//! - Pretty-printed JSON snapshot, self-contained HTML digest, and a
//!   console summary of the first headlines
//!
//! ## Usage
//!
//! ```sh
//! headline_digest --config sources.yaml --output-dir output
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Configure**: Load and validate the YAML source list
//! 2. **Fetch**: Visit each source in config order (pages scraped, feeds parsed)
//! 3. **Aggregate**: Combine per-source results under one timestamp
//! 4. **Output**: Write `headlines.json` and `headlines.html`, print a summary

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod aggregate;
mod cli;
mod config;
mod fetch;
mod models;
mod outputs;
mod utils;

use aggregate::{assemble, fetch_all};
use cli::Cli;
use config::load_sources;
use fetch::build_client;
use outputs::{console, html, json};
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("headline_digest starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.config, ?args.output_dir, "Parsed CLI arguments");

    // Early check: ensure the output dir is writable
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Load source configuration ----
    let sources = match load_sources(Path::new(&args.config)) {
        Ok(sources) => sources,
        Err(e) => {
            error!(path = %args.config, error = %e, "Cannot load source configuration");
            return Err(e);
        }
    };
    let source_names: Vec<String> = sources.iter().map(|s| s.name.clone()).collect();

    // ---- Fetch headlines from every source ----
    let client = build_client()?;
    let headlines = fetch_all(&client, &sources).await;
    info!(count = headlines.len(), "Total headlines collected");

    let result = assemble(source_names, headlines);

    // ---- Write outputs ----
    if let Err(e) = json::write_snapshot(&result, &args.output_dir).await {
        error!(error = %e, "Failed to write JSON snapshot");
    }

    if let Err(e) = html::write_digest(&result, &args.output_dir).await {
        error!(error = %e, "Failed to write HTML digest");
    }

    console::print_summary(&result);

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
