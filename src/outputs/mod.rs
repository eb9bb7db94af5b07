//! Output generation modules for the JSON snapshot, HTML digest, and console summary.
//!
//! This module contains submodules responsible for rendering a finished
//! run's [`AggregateResult`](crate::models::AggregateResult):
//!
//! # Submodules
//!
//! - [`json`]: Writes the aggregate to a pretty-printed JSON snapshot
//! - [`html`]: Renders a self-contained HTML digest grouped by source
//! - [`console`]: Prints a short summary block to stdout
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── headlines.json   # machine-readable snapshot
//! └── headlines.html   # human-readable digest
//! ```
//!
//! Both files are overwritten on every run. Write failures are reported to
//! the caller, which logs them without aborting the run.

pub mod console;
pub mod html;
pub mod json;
