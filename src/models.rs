//! Data models for fetched headlines and the aggregated run result.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Headline`]: A single normalized headline from any source
//! - [`AggregateResult`]: Everything one run produced, serialized to the
//!   JSON snapshot and rendered into the HTML digest
//!
//! [`AggregateResult`] uses camelCase field names to match the snapshot
//! schema consumed downstream, hence the `#[allow(non_snake_case)]` attribute.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single headline extracted from a web page or an Atom feed.
///
/// Every headline that reaches the aggregate carries a non-empty title and
/// an absolute URL. Deduplication is by `url` only, scoped to the source
/// the headline came from.
///
/// # Fields
///
/// * `title` - The link text (trimmed; whitespace-collapsed on the page path)
/// * `url` - The absolute article URL
/// * `source` - The configured name of the source that produced it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Headline {
    /// The headline text.
    pub title: String,
    /// The absolute URL the headline links to.
    pub url: String,
    /// The name of the source this headline was fetched from.
    pub source: String,
}

/// The complete output of one aggregation run.
///
/// Each execution produces exactly one `AggregateResult`, which is
/// serialized to JSON (for downstream consumption) and rendered to HTML
/// (for reading). Field declaration order is the snapshot's field order:
/// `fetchedAt`, `totalCount`, `sources`, `headlines`.
///
/// # Invariants
///
/// * `totalCount` always equals `headlines.len()`
/// * `sources` lists every configured source name in configuration order,
///   including sources that failed or returned nothing
#[allow(non_snake_case)]
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct AggregateResult {
    /// When the run fetched its data, in UTC.
    pub fetchedAt: DateTime<Utc>,
    /// Total number of headlines across all sources.
    pub totalCount: usize,
    /// The configured source names, in configuration order.
    pub sources: Vec<String>,
    /// All collected headlines, in source order then extraction order.
    pub headlines: Vec<Headline>,
}
