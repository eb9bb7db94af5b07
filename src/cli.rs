//! Command-line interface definitions for the headline digest.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the headline digest application.
///
/// Both options have working defaults, so a bare invocation reads
/// `sources.yaml` from the working directory and writes into `output/`.
///
/// # Examples
///
/// ```sh
/// # Defaults: ./sources.yaml in, ./output/ out
/// headline_digest
///
/// # Explicit paths
/// headline_digest -c conf/sources.yaml -o /srv/www/headlines
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the YAML source configuration
    #[arg(short, long, default_value = "sources.yaml")]
    pub config: String,

    /// Directory the JSON snapshot and HTML digest are written into
    #[arg(short, long, default_value = "output")]
    pub output_dir: String,
}
