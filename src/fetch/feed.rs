//! Atom feed fetcher for `rss` sources.
//!
//! Every configured feed URL is fetched and parsed independently; a feed
//! that fails to download or parse is logged and skipped without touching
//! its siblings. Only the first [`ENTRY_LIMIT`] entries of each feed are
//! considered, and the source's combined results are deduplicated by URL.
//!
//! # Entry Shape
//!
//! An entry contributes a headline when its `title` text is non-empty and
//! its first `rel="alternate"` link carries a non-empty `href`. An entry
//! missing either is skipped; the rest of the feed is unaffected.

use crate::config::SourceConfig;
use crate::models::Headline;
use crate::utils::truncate_for_log;
use itertools::Itertools;
use quick_xml::de::from_str;
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;
use tracing::{debug, info, instrument, warn};

/// Entries considered per feed; anything past this is ignored.
const ENTRY_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(rename = "entry", default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    title: Option<String>,
    #[serde(rename = "link", default)]
    links: Vec<Link>,
}

#[derive(Debug, Deserialize)]
struct Link {
    #[serde(rename = "@rel")]
    rel: Option<String>,
    #[serde(rename = "@href")]
    href: Option<String>,
}

/// Fetch every feed of an `rss` source and collect its headlines.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `source` - The `rss` source whose `feeds` are fetched in order
///
/// # Returns
///
/// The source's headlines, deduplicated by URL with first-seen order
/// preserved. Feeds that fail contribute nothing.
#[instrument(level = "info", skip_all, fields(source = %source.name))]
pub async fn fetch_headlines(client: &Client, source: &SourceConfig) -> Vec<Headline> {
    let mut collected: Vec<Headline> = Vec::new();
    for feed_url in &source.feeds {
        match fetch_feed(client, feed_url).await {
            Ok(body) => match entries_from_atom(&body, &source.name) {
                Ok(mut entries) => {
                    debug!(feed = %feed_url, count = entries.len(), "Parsed feed entries");
                    collected.append(&mut entries);
                }
                Err(e) => {
                    warn!(
                        feed = %feed_url,
                        error = %e,
                        body_preview = %truncate_for_log(&body, 120),
                        "Feed did not parse as Atom; skipping feed"
                    );
                }
            },
            Err(e) => {
                warn!(feed = %feed_url, error = %e, "Feed fetch failed; skipping feed");
            }
        }
    }

    let headlines: Vec<Headline> = collected
        .into_iter()
        .unique_by(|h| h.url.clone())
        .collect();
    info!(count = headlines.len(), "Collected feed headlines");
    headlines
}

/// Download one feed body. Unlike the page fetcher, an HTTP error status
/// fails the feed.
async fn fetch_feed(client: &Client, feed_url: &str) -> Result<String, Box<dyn Error>> {
    let body = client
        .get(feed_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

/// Parse an Atom document into headlines for `source_name`.
///
/// A well-formed XML document without Atom entries (an RSS 2.0 body, say)
/// yields an empty list rather than an error. Broken XML is an error; the
/// caller discards the whole feed.
fn entries_from_atom(xml: &str, source_name: &str) -> Result<Vec<Headline>, Box<dyn Error>> {
    let feed: Feed = from_str(&scrub_html_entities(xml))?;

    let mut headlines = Vec::new();
    for entry in feed.entries.into_iter().take(ENTRY_LIMIT) {
        let title = entry.title.as_deref().unwrap_or_default().trim().to_string();
        let href = entry
            .links
            .iter()
            .find(|l| l.rel.as_deref() == Some("alternate"))
            .and_then(|l| l.href.clone())
            .unwrap_or_default();
        if title.is_empty() || href.is_empty() {
            continue;
        }
        headlines.push(Headline {
            title,
            url: href,
            source: source_name.to_string(),
        });
    }
    Ok(headlines)
}

/// Map the HTML entities that commonly leak into feed bodies onto plain
/// characters, so the XML parser does not reject the document.
fn scrub_html_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "\u{2013}")
        .replace("&mdash;", "\u{2014}")
        .replace("&ldquo;", "\u{201c}")
        .replace("&rdquo;", "\u{201d}")
        .replace("&lsquo;", "\u{2018}")
        .replace("&rsquo;", "\u{2019}")
}
