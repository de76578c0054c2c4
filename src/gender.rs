//! Gender participation views.
//!
//! Built on the gender admission path, which keeps athletes without a
//! recorded age. The timeline counts participants (one per athlete per
//! Games); the per-sport ranking counts event entries.

use anyhow::Result;

use olympic_lens_core::aggregate;
use olympic_lens_core::filter::{self, FilterSpec};
use olympic_lens_core::store::{dedupe_per_games, RecordStore};

use crate::config::Config;
use crate::loader;

/// Male/female participation per Games year, with female share.
pub fn run_timeline(config: &Config, country: Option<String>) -> Result<()> {
    let (rows, regions) = loader::load_dataset(config)?;
    let store = RecordStore::build_gender_view(&rows, &regions);

    let spec = FilterSpec {
        country,
        ..FilterSpec::default()
    };
    let view = filter::apply(store.records(), &spec);
    let participants = dedupe_per_games(&view);
    let timeline = aggregate::gender_timeline(&participants);

    if timeline.is_empty() {
        println!("No records match.");
        return Ok(());
    }

    println!(
        "  {:<6} {:>8} {:>8} {:>8} {:>9}",
        "YEAR", "MALE", "FEMALE", "TOTAL", "FEMALE%"
    );
    println!("  {}", "-".repeat(44));
    for row in &timeline {
        println!(
            "  {:<6} {:>8} {:>8} {:>8} {:>9.1}",
            row.year, row.male, row.female, row.total, row.female_pct
        );
    }
    println!();
    Ok(())
}

/// Sports ranked by female participation share.
pub fn run_sports(config: &Config, year: Option<i32>) -> Result<()> {
    let (rows, regions) = loader::load_dataset(config)?;
    let store = RecordStore::build_gender_view(&rows, &regions);

    let spec = FilterSpec {
        year,
        ..FilterSpec::default()
    };
    let view = filter::apply(store.records(), &spec);
    let shares = aggregate::gender_share_by_sport(&view);

    if shares.is_empty() {
        println!("No records match.");
        return Ok(());
    }

    println!(
        "  {:<28} {:>8} {:>8} {:>8} {:>9}",
        "SPORT", "MALE", "FEMALE", "TOTAL", "FEMALE%"
    );
    println!("  {}", "-".repeat(66));
    for row in &shares {
        println!(
            "  {:<28} {:>8} {:>8} {:>8} {:>9.1}",
            row.sport, row.male, row.female, row.total, row.female_pct
        );
    }
    println!();
    Ok(())
}
