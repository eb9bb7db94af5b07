//! Web page fetcher for `web` sources.
//!
//! Fetches the configured page once and extracts headlines from every
//! element matched by the source's selectors. Extraction is best-effort
//! per element: anything without a usable `href` and text is silently
//! skipped, while a transport failure drops the whole source.
//!
//! # Extraction Order
//!
//! Each matched element goes through, in order: read `href`, collect text,
//! resolve against the page URL, apply `exclude` substrings, deduplicate by
//! resolved URL, collapse whitespace, drop titles under
//! [`MIN_TITLE_CHARS`] characters. A URL enters the dedup set even when
//! its title is later dropped for being too short.

use crate::config::SourceConfig;
use crate::models::Headline;
use crate::utils::collapse_whitespace;
use reqwest::Client;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Minimum headline length in characters; shorter link text is ignored.
const MIN_TITLE_CHARS: usize = 10;

/// Fetch a `web` source's page and extract its headlines.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `source` - The `web` source to fetch
///
/// # Returns
///
/// The extracted headlines, or an empty list when the page could not be
/// fetched at all.
#[instrument(level = "info", skip_all, fields(source = %source.name))]
pub async fn fetch_headlines(client: &Client, source: &SourceConfig) -> Vec<Headline> {
    let page_url = match source.url.as_deref() {
        Some(u) => u,
        None => {
            error!("Web source has no url; nothing to fetch");
            return Vec::new();
        }
    };

    let body = match fetch_page(client, page_url).await {
        Ok(body) => body,
        Err(e) => {
            error!(url = %page_url, error = %e, "Page fetch failed; skipping source");
            return Vec::new();
        }
    };

    let headlines = extract_headlines(&body, page_url, source);
    info!(count = headlines.len(), "Collected page headlines");
    headlines
}

/// Download a page body. An HTTP error status is not a failure here; the
/// served body still gets parsed.
async fn fetch_page(client: &Client, url: &str) -> Result<String, Box<dyn Error>> {
    let body = client.get(url).send().await?.text().await?;
    Ok(body)
}

/// Run the selector queries against a fetched page body.
///
/// Selector pieces that fail to parse are skipped; the remaining pieces
/// are queried in order and contribute their matches in document order.
fn extract_headlines(body: &str, page_url: &str, source: &SourceConfig) -> Vec<Headline> {
    let base = match Url::parse(page_url) {
        Ok(base) => base,
        Err(e) => {
            error!(url = %page_url, error = %e, "Page URL does not parse; nothing to extract");
            return Vec::new();
        }
    };

    let document = Html::parse_document(body);
    let selectors: Vec<Selector> = source
        .selectors
        .articles
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| Selector::parse(piece).ok())
        .collect();
    debug!(count = selectors.len(), "Parsed article selectors");

    let mut seen: HashSet<String> = HashSet::new();
    let mut headlines = Vec::new();
    for selector in &selectors {
        for element in document.select(selector) {
            let href = match element.value().attr("href") {
                Some(href) if !href.is_empty() => href,
                _ => continue,
            };
            let text = element.text().collect::<Vec<_>>().join(" ");
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            let resolved = match base.join(href) {
                Ok(resolved) => resolved.to_string(),
                Err(_) => continue,
            };
            if source.selectors.exclude.iter().any(|ex| resolved.contains(ex.as_str())) {
                continue;
            }
            if !seen.insert(resolved.clone()) {
                continue;
            }
            let title = collapse_whitespace(text);
            if title.chars().count() < MIN_TITLE_CHARS {
                continue;
            }
            headlines.push(Headline {
                title,
                url: resolved,
                source: source.name.clone(),
            });
        }
    }
    headlines
}
