//! Dataset overview.
//!
//! Prints a quick summary of what was loaded: raw row counts, how many rows
//! each admission policy retained, catalog sizes, and a per-season
//! breakdown. Used by `olens stats` to give confidence that the source
//! files are complete before digging into the aggregate views.

use anyhow::Result;
use std::collections::HashSet;

use olympic_lens_core::record::Season;
use olympic_lens_core::store::{dedupe_per_games, RecordStore};

use crate::config::Config;
use crate::loader;

pub fn run_stats(config: &Config) -> Result<()> {
    let (rows, regions) = loader::load_dataset(config)?;

    let age_view = RecordStore::build_age_view(&rows, &regions);
    let gender_view = RecordStore::build_gender_view(&rows, &regions);

    let unique_athletes: HashSet<i64> = gender_view
        .records()
        .iter()
        .map(|r| r.athlete_id)
        .collect();
    let participants = dedupe_per_games(gender_view.records()).len();

    println!("Olympic Lens: Dataset Stats");
    println!("===========================");
    println!();
    println!("  Athletes file: {}", config.data.athletes_csv.display());
    println!("  Regions file:  {}", config.data.regions_csv.display());
    println!();
    println!("  Raw rows:             {}", rows.len());
    println!("  Age view records:     {}", age_view.len());
    println!("  Gender view records:  {}", gender_view.len());
    println!("  Unique athletes:      {}", unique_athletes.len());
    println!("  Games participations: {}", participants);
    println!("  Region mappings:      {}", regions.len());

    let years = gender_view.years();
    if let (Some(first), Some(last)) = (years.first(), years.last()) {
        println!("  Years:                {}-{} ({} Games years)", first, last, years.len());
    }
    println!("  Sports:               {}", gender_view.sports().len());
    // Minus the "all" sentinel entry.
    println!("  Countries:            {}", gender_view.country_options().len() - 1);

    let summer = gender_view
        .records()
        .iter()
        .filter(|r| r.season == Season::Summer)
        .count();
    let winter = gender_view.len() - summer;
    println!();
    println!("  By season:");
    println!("  {:<10} {:>10}", "SEASON", "RECORDS");
    println!("  {}", "-".repeat(21));
    println!("  {:<10} {:>10}", "Summer", summer);
    println!("  {:<10} {:>10}", "Winter", winter);
    println!();

    Ok(())
}
