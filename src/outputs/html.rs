//! HTML digest output.
//!
//! Renders the run into one self-contained document and writes it to
//! `headlines.html` in the output directory. Headlines are grouped by
//! source in first-occurrence order, each link shows its host underneath,
//! and the stylesheet is inlined so the file has no external assets.
//!
//! Titles have `<` and `>` escaped; URLs go into `href` untouched.

use crate::models::{AggregateResult, Headline};
use crate::utils::host_of;
use std::error::Error;
use std::fmt::Write;
use tokio::fs;
use tracing::{error, info, instrument};

/// File name of the digest inside the output directory.
pub const DIGEST_FILE: &str = "headlines.html";

const STYLESHEET: &str = "\
body { margin: 0; font-family: Georgia, 'Times New Roman', serif; background: #f4f1ea; color: #1a1a1a; }
.container { max-width: 760px; margin: 0 auto; padding: 2rem 1rem; }
header { background: linear-gradient(135deg, #1f3a5f, #2d5f8a); color: #fff; padding: 1.5rem; border-radius: 6px; }
header h1 { margin: 0 0 0.5rem 0; font-size: 1.6rem; }
.meta { margin: 0; opacity: 0.85; font-size: 0.9rem; }
.source-section { background: #fff; margin-top: 1.5rem; padding: 1rem 1.25rem; border-radius: 6px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
.source-section h2 { margin: 0 0 0.75rem 0; font-size: 1.2rem; border-bottom: 2px solid #2d5f8a; padding-bottom: 0.4rem; }
.count { float: right; font-size: 0.8rem; background: #2d5f8a; color: #fff; border-radius: 10px; padding: 0.1rem 0.6rem; }
.headline-list { list-style: none; margin: 0; padding: 0; }
.headline-list li { padding: 0.5rem 0; border-bottom: 1px solid #eee; }
.headline-list li:last-child { border-bottom: none; }
.headline-list a { color: #1f3a5f; text-decoration: none; }
.headline-list a:hover { text-decoration: underline; }
.url { color: #888; font-size: 0.8rem; margin-top: 0.15rem; }
.footer { text-align: center; color: #999; font-size: 0.8rem; margin-top: 2rem; }
";

/// Render the digest document for an aggregate.
///
/// # Arguments
///
/// * `result` - The aggregate to render
///
/// # Returns
///
/// The complete HTML document as a string.
pub fn render_digest(result: &AggregateResult) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Headlines</title>\n<style>\n");
    html.push_str(STYLESHEET);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    writeln!(html, "<header>").unwrap();
    writeln!(html, "<h1>Headline Digest</h1>").unwrap();
    writeln!(
        html,
        "<p class=\"meta\">Fetched {} UTC &middot; {} &middot; {} headlines</p>",
        result.fetchedAt.format("%Y-%m-%d %H:%M:%S"),
        result.sources.join(", "),
        result.totalCount
    )
    .unwrap();
    writeln!(html, "</header>").unwrap();

    for (name, group) in group_by_source(&result.headlines) {
        writeln!(html, "<section class=\"source-section\">").unwrap();
        writeln!(
            html,
            "<h2>{} <span class=\"count\">{}</span></h2>",
            name,
            group.len()
        )
        .unwrap();
        writeln!(html, "<ul class=\"headline-list\">").unwrap();
        for headline in group {
            writeln!(
                html,
                "<li><a href=\"{}\">{}</a><div class=\"url\">{}</div></li>",
                headline.url,
                escape_angles(&headline.title),
                host_of(&headline.url)
            )
            .unwrap();
        }
        writeln!(html, "</ul>\n</section>").unwrap();
    }

    writeln!(html, "<p class=\"footer\">headline_digest</p>").unwrap();
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// Write the digest to `{output_dir}/headlines.html`, overwriting.
///
/// # Arguments
///
/// * `result` - The aggregate to render and write
/// * `output_dir` - Directory the digest is written into
///
/// # Returns
///
/// `Ok(())` on success, or an error if directory creation or the file
/// write fails.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub async fn write_digest(
    result: &AggregateResult,
    output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let html = render_digest(result);

    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(%output_dir, error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = format!("{}/{}", output_dir, DIGEST_FILE);
    info!(path = %path, "Writing HTML digest");
    fs::write(&path, html).await?;
    info!(path = %path, "Wrote HTML digest");

    Ok(())
}

/// Group headlines by source, keeping the order sources first appear in.
fn group_by_source(headlines: &[Headline]) -> Vec<(&str, Vec<&Headline>)> {
    let mut groups: Vec<(&str, Vec<&Headline>)> = Vec::new();
    for headline in headlines {
        match groups
            .iter_mut()
            .find(|(name, _)| *name == headline.source.as_str())
        {
            Some((_, list)) => list.push(headline),
            None => groups.push((headline.source.as_str(), vec![headline])),
        }
    }
    groups
}

/// Escape `<` and `>` only; everything else is left alone.
fn escape_angles(s: &str) -> String {
    s.replace('<', "&lt;").replace('>', "&gt;")
}
