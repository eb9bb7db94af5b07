//! Source fetchers for collecting headlines from configured endpoints.
//!
//! This module contains one submodule per source kind, dispatched on the
//! configured `type`:
//!
//! | Kind | Module | Method | Notes |
//! |------|--------|--------|-------|
//! | `web` | [`page`] | HTML scraping | CSS selector queries against one page |
//! | `rss` | [`feed`] | Atom parsing | First 20 entries of each feed |
//!
//! # Common Patterns
//!
//! Both fetchers:
//! - Share one HTTP client with a single request timeout
//! - Return `Vec<Headline>` and never fail the run (failures are logged
//!   and contribute nothing)
//! - Deduplicate collected URLs within the source

use crate::config::{SourceConfig, SourceKind};
use crate::models::Headline;
use reqwest::Client;
use std::error::Error;
use std::time::Duration;

pub mod feed;
pub mod page;

/// Total time budget for any single HTTP request. Nothing is retried.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the HTTP client shared by every fetch in a run.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client() -> Result<Client, Box<dyn Error>> {
    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("headline_digest/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Fetch one source's headlines according to its configured kind.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `source` - The source to fetch
///
/// # Returns
///
/// Whatever the source yielded; empty when everything about it failed.
pub async fn fetch_source(client: &Client, source: &SourceConfig) -> Vec<Headline> {
    match source.kind {
        SourceKind::Rss => feed::fetch_headlines(client, source).await,
        SourceKind::Web => page::fetch_headlines(client, source).await,
    }
}
