//! JSON snapshot output.
//!
//! This module serializes the run's [`AggregateResult`] to a JSON file for
//! consumption by external clients.
//!
//! # Format
//!
//! The snapshot is pretty-printed UTF-8. Non-ASCII characters are written
//! verbatim rather than `\u`-escaped, and the field order follows the
//! struct declaration: `fetchedAt`, `totalCount`, `sources`, `headlines`.

use crate::models::AggregateResult;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// File name of the snapshot inside the output directory.
pub const SNAPSHOT_FILE: &str = "headlines.json";

/// Write the aggregate snapshot to `{output_dir}/headlines.json`.
///
/// The previous run's file, if any, is overwritten.
///
/// # Arguments
///
/// * `result` - The aggregate to serialize
/// * `output_dir` - Directory the snapshot is written into
///
/// # Returns
///
/// `Ok(())` on success, or an error if serialization, directory creation,
/// or the file write fails.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir))]
pub async fn write_snapshot(
    result: &AggregateResult,
    output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(result)?;

    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(%output_dir, error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = format!("{}/{}", output_dir, SNAPSHOT_FILE);
    info!(path = %path, "Writing JSON snapshot");
    fs::write(&path, json).await?;
    info!(path = %path, "Wrote JSON snapshot");

    Ok(())
}
