//! Source configuration: the YAML file that tells a run what to fetch.
//!
//! The file holds a single top-level `sources` list. Each entry names a
//! source and declares how to read it:
//!
//! ```yaml
//! sources:
//!   - name: Example Wire
//!     type: rss
//!     feeds:
//!       - https://example.com/atom.xml
//!   - name: Example Site
//!     url: https://example.com/
//!     selectors:
//!       articles: "h2 a, h3 a"
//!       exclude:
//!         - /tag/
//! ```
//!
//! `type` defaults to `web` and any unrecognized value is read as `web`.
//! Configuration problems are the one fatal error class in this program:
//! a missing file, unparseable YAML, or an invalid source entry aborts the
//! run before any fetching starts.

use serde::{Deserialize, Deserializer};
use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tracing::info;
use url::Url;

/// How a source's headlines are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Fetch `url` once and query the document with CSS selectors.
    #[default]
    Web,
    /// Fetch every URL in `feeds` and parse each as an Atom document.
    Rss,
}

/// Element selection rules for a `web` source.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorRules {
    /// Comma-separated CSS selectors matched against the page.
    #[serde(default = "default_articles")]
    pub articles: String,
    /// Substrings that disqualify a resolved link URL.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for SelectorRules {
    fn default() -> Self {
        SelectorRules {
            articles: default_articles(),
            exclude: Vec::new(),
        }
    }
}

fn default_articles() -> String {
    "a".to_string()
}

/// One configured headline source.
///
/// # Fields
///
/// * `name` - Display name; becomes the `source` field on every headline
/// * `kind` - The YAML `type` value (`web` unless exactly `rss`)
/// * `url` - Page URL, used by `web` sources
/// * `feeds` - Feed URLs, used by `rss` sources
/// * `selectors` - Selection rules, used by `web` sources
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// The source's display name.
    pub name: String,
    /// How to fetch this source.
    #[serde(default, rename = "type", deserialize_with = "kind_from_yaml")]
    pub kind: SourceKind,
    /// The page URL for `web` sources.
    pub url: Option<String>,
    /// The feed URLs for `rss` sources.
    #[serde(default)]
    pub feeds: Vec<String>,
    /// The selection rules for `web` sources.
    #[serde(default)]
    pub selectors: SelectorRules,
}

/// Top-level shape of the configuration file.
#[derive(Debug, Deserialize)]
struct SourcesFile {
    #[serde(default)]
    sources: Vec<SourceConfig>,
}

/// Anything other than the literal string `rss` is read as a web source.
fn kind_from_yaml<'de, D>(deserializer: D) -> Result<SourceKind, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(match raw.as_str() {
        "rss" => SourceKind::Rss,
        _ => SourceKind::Web,
    })
}

/// Load and validate the source list from a YAML file.
///
/// # Arguments
///
/// * `path` - Path of the configuration file to read
///
/// # Returns
///
/// The validated sources in file order.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the YAML cannot be parsed,
/// or any source fails validation (empty name, `web` without a parseable
/// `url`, `rss` without feeds). Callers treat these as fatal.
pub fn load_sources(path: &Path) -> Result<Vec<SourceConfig>, Box<dyn Error>> {
    let raw = stdfs::read_to_string(path)
        .map_err(|e| format!("cannot read config file '{}': {}", path.display(), e))?;
    let file: SourcesFile = serde_yaml::from_str(&raw)
        .map_err(|e| format!("cannot parse config file '{}': {}", path.display(), e))?;

    for source in &file.sources {
        validate(source)?;
    }

    info!(path = %path.display(), count = file.sources.len(), "Loaded source configuration");
    Ok(file.sources)
}

fn validate(source: &SourceConfig) -> Result<(), Box<dyn Error>> {
    if source.name.trim().is_empty() {
        return Err("configuration contains a source with an empty name".into());
    }
    match source.kind {
        SourceKind::Web => match source.url.as_deref() {
            Some(url) => {
                Url::parse(url).map_err(|e| {
                    format!("source '{}': invalid url '{}' ({})", source.name, url, e)
                })?;
            }
            None => {
                return Err(format!("source '{}': web source needs a url", source.name).into());
            }
        },
        SourceKind::Rss => {
            if source.feeds.is_empty() {
                return Err(format!("source '{}': rss source has no feeds", source.name).into());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(yaml: &str) -> Vec<SourceConfig> {
        let file: SourcesFile = serde_yaml::from_str(yaml).unwrap();
        file.sources
    }

    #[test]
    fn test_web_source_defaults() {
        let sources = parse(
            r#"
sources:
  - name: Example Site
    url: https://example.com/
"#,
        );

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "Example Site");
        assert_eq!(sources[0].kind, SourceKind::Web);
        assert_eq!(sources[0].selectors.articles, "a");
        assert!(sources[0].selectors.exclude.is_empty());
        assert!(sources[0].feeds.is_empty());
    }

    #[test]
    fn test_rss_source_parses() {
        let sources = parse(
            r#"
sources:
  - name: Example Wire
    type: rss
    feeds:
      - https://example.com/atom.xml
      - https://example.com/world.xml
"#,
        );

        assert_eq!(sources[0].kind, SourceKind::Rss);
        assert_eq!(sources[0].feeds.len(), 2);
    }

    #[test]
    fn test_unknown_type_is_read_as_web() {
        let sources = parse(
            r#"
sources:
  - name: Odd One
    type: carrier-pigeon
    url: https://example.com/
"#,
        );

        assert_eq!(sources[0].kind, SourceKind::Web);
    }

    #[test]
    fn test_selector_rules_parse() {
        let sources = parse(
            r#"
sources:
  - name: Example Site
    url: https://example.com/
    selectors:
      articles: "h2 a, h3 a"
      exclude:
        - /tag/
        - /live/
"#,
        );

        assert_eq!(sources[0].selectors.articles, "h2 a, h3 a");
        assert_eq!(sources[0].selectors.exclude, vec!["/tag/", "/live/"]);
    }

    #[test]
    fn test_missing_sources_key_means_empty_run() {
        let sources = parse("{}");
        assert!(sources.is_empty());
    }

    #[test]
    fn test_web_source_without_url_fails_validation() {
        let sources = parse(
            r#"
sources:
  - name: No Url Here
"#,
        );

        let err = validate(&sources[0]).unwrap_err().to_string();
        assert!(err.contains("No Url Here"));
        assert!(err.contains("needs a url"));
    }

    #[test]
    fn test_web_source_with_garbage_url_fails_validation() {
        let sources = parse(
            r#"
sources:
  - name: Broken
    url: "not a url"
"#,
        );

        assert!(validate(&sources[0]).is_err());
    }

    #[test]
    fn test_rss_source_without_feeds_fails_validation() {
        let sources = parse(
            r#"
sources:
  - name: Feedless
    type: rss
"#,
        );

        let err = validate(&sources[0]).unwrap_err().to_string();
        assert!(err.contains("no feeds"));
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let sources = parse(
            r#"
sources:
  - name: "  "
    url: https://example.com/
"#,
        );

        assert!(validate(&sources[0]).is_err());
    }

    #[test]
    fn test_load_sources_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
sources:
  - name: Example Site
    url: https://example.com/
  - name: Example Wire
    type: rss
    feeds:
      - https://example.com/atom.xml
"#
        )
        .unwrap();

        let sources = load_sources(file.path()).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[1].kind, SourceKind::Rss);
    }

    #[test]
    fn test_load_sources_missing_file_fails() {
        let err = load_sources(Path::new("/nonexistent/sources.yaml")).unwrap_err();
        assert!(err.to_string().contains("cannot read config file"));
    }
}
