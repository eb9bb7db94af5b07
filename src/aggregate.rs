//! Sequential source fetching and run-result assembly.
//!
//! Sources are fetched strictly one at a time in configuration order, and
//! a source that fails simply contributes zero headlines. The assembly
//! step is pure so the result invariants stay easy to test: the source
//! list always mirrors the configuration, and the total count always
//! equals the number of collected headlines.

use crate::config::SourceConfig;
use crate::fetch;
use crate::models::{AggregateResult, Headline};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{info, instrument};

/// Fetch every configured source, one at a time, in configuration order.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `sources` - The configured sources
///
/// # Returns
///
/// All collected headlines, concatenated in source order. Headlines are
/// deduplicated within each source only; the same URL from two different
/// sources appears twice.
#[instrument(level = "info", skip_all, fields(sources = sources.len()))]
pub async fn fetch_all(client: &Client, sources: &[SourceConfig]) -> Vec<Headline> {
    let per_source: Vec<Vec<Headline>> = stream::iter(sources)
        .then(|source| async move {
            info!(source = %source.name, "Fetching source");
            let headlines = fetch::fetch_source(client, source).await;
            info!(source = %source.name, count = headlines.len(), "Source finished");
            headlines
        })
        .collect()
        .await;

    per_source.into_iter().flatten().collect()
}

/// Wrap collected headlines with the fetch timestamp and summary counts.
///
/// `source_names` must hold every configured source name in configuration
/// order, whether or not the source produced anything.
pub fn assemble(source_names: Vec<String>, headlines: Vec<Headline>) -> AggregateResult {
    AggregateResult {
        fetchedAt: Utc::now(),
        totalCount: headlines.len(),
        sources: source_names,
        headlines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SelectorRules, SourceKind};

    fn web_source(name: &str, url: String) -> SourceConfig {
        SourceConfig {
            name: name.to_string(),
            kind: SourceKind::Web,
            url: Some(url),
            feeds: Vec::new(),
            selectors: SelectorRules::default(),
        }
    }

    #[test]
    fn test_assemble_counts_and_sources() {
        let names = vec!["A".to_string(), "B".to_string()];
        let headlines = vec![Headline {
            title: "Only headline in the run".to_string(),
            url: "https://example.com/1".to_string(),
            source: "B".to_string(),
        }];

        let result = assemble(names, headlines);
        assert_eq!(result.totalCount, 1);
        assert_eq!(result.totalCount, result.headlines.len());
        assert_eq!(result.sources, vec!["A", "B"]);
    }

    #[test]
    fn test_assemble_with_nothing_collected() {
        let result = assemble(vec!["Lone Source".to_string()], Vec::new());
        assert_eq!(result.totalCount, 0);
        assert_eq!(result.sources.len(), 1);
        assert!(result.headlines.is_empty());
    }

    #[tokio::test]
    async fn test_failed_source_contributes_nothing_but_stays_listed() {
        let mut server = mockito::Server::new_async().await;
        let _page = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(
                r#"<a href="/1">Working source headline 1</a>
                   <a href="/2">Working source headline 2</a>
                   <a href="/3">Working source headline 3</a>
                   <a href="/4">Working source headline 4</a>
                   <a href="/5">Working source headline 5</a>"#,
            )
            .create_async()
            .await;

        let sources = vec![
            web_source("Down Town Daily", "http://127.0.0.1:9/".to_string()),
            web_source("Working Wire", format!("{}/", server.url())),
        ];

        let client = crate::fetch::build_client().unwrap();
        let headlines = fetch_all(&client, &sources).await;
        let names: Vec<String> = sources.iter().map(|s| s.name.clone()).collect();
        let result = assemble(names, headlines);

        assert_eq!(result.sources.len(), 2);
        assert_eq!(result.sources[0], "Down Town Daily");
        assert_eq!(result.headlines.len(), 5);
        assert_eq!(result.totalCount, 5);
        assert!(result.headlines.iter().all(|h| h.source == "Working Wire"));
    }

    #[tokio::test]
    async fn test_sources_are_fetched_in_config_order() {
        let mut server = mockito::Server::new_async().await;
        let _first = server
            .mock("GET", "/first")
            .with_status(200)
            .with_body(r#"<a href="/f">Front page lead story</a>"#)
            .create_async()
            .await;
        let _second = server
            .mock("GET", "/second")
            .with_status(200)
            .with_body(r#"<a href="/s">Second section top story</a>"#)
            .create_async()
            .await;

        let sources = vec![
            web_source("First", format!("{}/first", server.url())),
            web_source("Second", format!("{}/second", server.url())),
        ];

        let client = crate::fetch::build_client().unwrap();
        let headlines = fetch_all(&client, &sources).await;

        let order: Vec<&str> = headlines.iter().map(|h| h.source.as_str()).collect();
        assert_eq!(order, vec!["First", "Second"]);
    }
}
