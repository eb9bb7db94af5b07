//! Console summary printed at the end of a run.
//!
//! A short plain-text block: the run's counts, then the first few
//! headlines with long titles cut off. Advisory output only; the files on
//! disk are the real product.

use crate::models::AggregateResult;
use std::fmt::Write;

/// Headlines shown in the summary.
const SUMMARY_LIMIT: usize = 10;

/// Longest title printed before truncation, in characters.
const TITLE_BUDGET: usize = 50;

/// Render the summary block.
///
/// # Arguments
///
/// * `result` - The aggregate to summarize
///
/// # Returns
///
/// The summary text, newline-terminated.
pub fn render_summary(result: &AggregateResult) -> String {
    let mut out = String::new();
    writeln!(out, "{}", "=".repeat(60)).unwrap();
    writeln!(out, "HEADLINE DIGEST").unwrap();
    writeln!(
        out,
        "Fetched at: {}",
        result.fetchedAt.format("%Y-%m-%d %H:%M:%S UTC")
    )
    .unwrap();
    writeln!(out, "Sources:    {}", result.sources.len()).unwrap();
    writeln!(out, "Headlines:  {}", result.totalCount).unwrap();
    writeln!(out, "{}", "-".repeat(60)).unwrap();

    for (i, headline) in result.headlines.iter().take(SUMMARY_LIMIT).enumerate() {
        writeln!(
            out,
            "{:2}. [{}] {}",
            i + 1,
            headline.source,
            clip_title(&headline.title)
        )
        .unwrap();
    }
    out
}

/// Print the summary block to stdout.
pub fn print_summary(result: &AggregateResult) {
    print!("{}", render_summary(result));
}

fn clip_title(title: &str) -> String {
    if title.chars().count() > TITLE_BUDGET {
        let clipped: String = title.chars().take(TITLE_BUDGET).collect();
        format!("{}...", clipped)
    } else {
        title.to_string()
    }
}
