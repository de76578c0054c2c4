//! CSV loading boundary.
//!
//! Reads the two source files (`athlete_events.csv` and `noc_regions.csv`)
//! into raw, untyped rows for the core's admission filters. I/O and parse
//! failures here are fatal to the session: the core is only ever handed a
//! complete row set. Row order follows file order, which the core's
//! first-seen tie-breaks rely on.

use anyhow::{Context, Result};
use std::path::Path;

use olympic_lens_core::record::{RawRegion, RawRow, RegionMap};

use crate::config::Config;

/// Read all athlete-event rows in file order.
pub fn load_rows(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open athlete events file: {}", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: RawRow = result
            .with_context(|| format!("Malformed CSV in {}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Read the NOC→region table and build the lookup map.
pub fn load_regions(path: &Path) -> Result<RegionMap> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open NOC regions file: {}", path.display()))?;

    let mut pairs = Vec::new();
    for result in reader.deserialize() {
        let pair: RawRegion = result
            .with_context(|| format!("Malformed CSV in {}", path.display()))?;
        pairs.push(pair);
    }
    Ok(RegionMap::from_pairs(&pairs))
}

/// Load the full dataset named by the config.
pub fn load_dataset(config: &Config) -> Result<(Vec<RawRow>, RegionMap)> {
    let regions = load_regions(&config.data.regions_csv)?;
    let rows = load_rows(&config.data.athletes_csv)?;
    Ok((rows, regions))
}
