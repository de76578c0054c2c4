//! Build the per-country summary artifact.
//!
//! Runs the single-pass summary reducer over the full, unfiltered row set
//! and emits a NOC-keyed JSON object (medal tallies, unique-athlete count,
//! top sport), suitable for serving as a static `noc_summary.json`.

use anyhow::Result;
use std::path::Path;

use olympic_lens_core::summary;

use crate::config::Config;
use crate::loader;

/// Produce the summary artifact.
///
/// If `output` is `Some`, writes to that file path. Otherwise writes to
/// stdout for piping.
pub fn run_summary(config: &Config, output: Option<&Path>) -> Result<()> {
    let (rows, regions) = loader::load_dataset(config)?;
    let summaries = summary::reduce(&rows, &regions);
    let json = serde_json::to_string_pretty(&summaries)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &json)?;
            eprintln!(
                "Wrote {} country summaries to {}",
                summaries.len(),
                path.display()
            );
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
