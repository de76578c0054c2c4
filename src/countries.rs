//! Country catalog, typeahead suggestions, and name resolution.
//!
//! The catalog comes from the gender view (the looser admission path), so
//! countries whose athletes never recorded an age still appear.

use anyhow::Result;

use olympic_lens_core::search;
use olympic_lens_core::store::RecordStore;

use crate::config::Config;
use crate::loader;

fn load_options(config: &Config) -> Result<Vec<search::CountryOption>> {
    let (rows, regions) = loader::load_dataset(config)?;
    let store = RecordStore::build_gender_view(&rows, &regions);
    Ok(store.country_options())
}

/// List all selectable country options, sentinel first.
pub fn run_list(config: &Config) -> Result<()> {
    let options = load_options(config)?;
    println!("  {:<24} {}", "ID", "NAME");
    println!("  {}", "-".repeat(48));
    for option in &options {
        println!("  {:<24} {}", option.id, option.name);
    }
    println!();
    println!("  {} countries", options.len() - 1);
    Ok(())
}

/// Prefix-match suggestions for a partial country name.
pub fn run_suggest(config: &Config, query: &str, limit: Option<usize>) -> Result<()> {
    let options = load_options(config)?;
    let limit = limit.unwrap_or(config.aggregation.suggest_limit);
    let matches = search::suggest(query, &options, limit);

    if matches.is_empty() {
        println!("No suggestions.");
        return Ok(());
    }
    for option in matches {
        println!("  {}", option.name);
    }
    Ok(())
}

/// Resolve an exact country name to its filter id, sentinel on a miss.
pub fn run_resolve(config: &Config, query: &str) -> Result<()> {
    let options = load_options(config)?;
    let id = search::resolve(query, &options);
    println!("{}", id);
    Ok(())
}
