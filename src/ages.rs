//! Age-centric views: histogram, medal rates, per-sport and per-year
//! statistics, and the veteran-athlete ranking.
//!
//! All commands here build the age view (admission requires a numeric age),
//! apply the user's filter selection, and run one aggregation pipeline.
//! Empty results print a message rather than failing.

use anyhow::Result;

use anyhow::bail;

use olympic_lens_core::aggregate;
use olympic_lens_core::filter::{self, FilterSpec, MedalFilter};
use olympic_lens_core::record::Medal;
use olympic_lens_core::store::{dedupe_per_games, RecordStore};

use crate::config::Config;
use crate::loader;

fn load_age_view(config: &Config) -> Result<RecordStore> {
    let (rows, regions) = loader::load_dataset(config)?;
    Ok(RecordStore::build_age_view(&rows, &regions))
}

fn parse_medal_filter(value: &str) -> Result<MedalFilter> {
    match value {
        "all" => Ok(MedalFilter::All),
        "any" => Ok(MedalFilter::Any),
        other => match Medal::parse(other) {
            Some(medal) => Ok(MedalFilter::Only(medal)),
            None => bail!(
                "Unknown medal filter '{}' (expected all, any, Gold, Silver, or Bronze)",
                other
            ),
        },
    }
}

/// Age distribution with medalist counts per bucket.
pub fn run_histogram(
    config: &Config,
    sport: Option<String>,
    year: Option<i32>,
    min_age: Option<f64>,
    max_age: Option<f64>,
    medal: &str,
) -> Result<()> {
    let store = load_age_view(config)?;
    let spec = FilterSpec {
        sport,
        year,
        age_min: min_age,
        age_max: max_age,
        medal: parse_medal_filter(medal)?,
        ..FilterSpec::default()
    };
    let view = filter::apply(store.records(), &spec);
    let buckets = aggregate::age_distribution(&view);

    if buckets.is_empty() {
        println!("No records match.");
        return Ok(());
    }

    println!("  {:<6} {:>8} {:>10}", "AGE", "ENTRIES", "MEDALISTS");
    println!("  {}", "-".repeat(26));
    for bucket in &buckets {
        println!(
            "  {:<6} {:>8} {:>10}",
            bucket.age, bucket.count, bucket.medal_count
        );
    }
    println!();
    println!("  {} buckets, {} entries", buckets.len(), view.len());
    Ok(())
}

/// Medal rate by age bucket.
pub fn run_rates(config: &Config, sport: Option<String>, year: Option<i32>) -> Result<()> {
    let store = load_age_view(config)?;
    let spec = FilterSpec {
        sport,
        year,
        ..FilterSpec::default()
    };
    let view = filter::apply(store.records(), &spec);
    let rows = aggregate::medal_rates_by_age(&view);

    if rows.is_empty() {
        println!("No records match.");
        return Ok(());
    }

    println!(
        "  {:<6} {:>8} {:>7} {:>7} {:>7} {:>8} {:>8} {:>8}",
        "AGE", "ENTRIES", "GOLD", "SILVER", "BRONZE", "GOLD%", "SILVER%", "BRONZE%"
    );
    println!("  {}", "-".repeat(64));
    for row in &rows {
        println!(
            "  {:<6} {:>8} {:>7} {:>7} {:>7} {:>8.1} {:>8.1} {:>8.1}",
            row.age, row.total, row.gold, row.silver, row.bronze,
            row.gold_pct, row.silver_pct, row.bronze_pct
        );
    }
    println!();
    Ok(())
}

/// Ranked mean age per sport, small samples excluded.
pub fn run_by_sport(config: &Config, min_sample: Option<usize>) -> Result<()> {
    let store = load_age_view(config)?;
    let floor = min_sample.unwrap_or(config.aggregation.min_sample_sport);
    let rows = aggregate::age_stats_by_sport(store.records(), floor);

    if rows.is_empty() {
        println!("No sport reaches the minimum sample of {}.", floor);
        return Ok(());
    }

    println!(
        "  {:<28} {:>8} {:>8} {:>6} {:>6}",
        "SPORT", "SAMPLE", "MEAN", "MIN", "MAX"
    );
    println!("  {}", "-".repeat(60));
    for row in &rows {
        println!(
            "  {:<28} {:>8} {:>8.1} {:>6.0} {:>6.0}",
            row.sport, row.sample, row.mean_age, row.min_age, row.max_age
        );
    }
    println!();
    Ok(())
}

/// Youngest/oldest/mean age per Games year.
pub fn run_trend(
    config: &Config,
    from: Option<i32>,
    to: Option<i32>,
    min_sample: Option<usize>,
) -> Result<()> {
    let store = load_age_view(config)?;
    let spec = FilterSpec {
        year_min: from,
        year_max: to,
        ..FilterSpec::default()
    };
    let view = filter::apply(store.records(), &spec);
    let floor = min_sample.unwrap_or(config.aggregation.min_sample_year);
    let rows = aggregate::age_trend_by_year(&view, floor);

    if rows.is_empty() {
        println!("No records match.");
        return Ok(());
    }

    println!(
        "  {:<6} {:>8} {:>9} {:>7} {:>7}",
        "YEAR", "SAMPLE", "YOUNGEST", "OLDEST", "MEAN"
    );
    println!("  {}", "-".repeat(41));
    for row in &rows {
        println!(
            "  {:<6} {:>8} {:>9.0} {:>7.0} {:>7.1}",
            row.year, row.sample, row.youngest, row.oldest, row.mean_age
        );
    }
    println!();
    Ok(())
}

/// Countries ranked by distinct athletes at or above an age threshold.
pub fn run_veterans(config: &Config, threshold: f64, year: Option<i32>) -> Result<()> {
    let store = load_age_view(config)?;
    let spec = FilterSpec {
        year,
        ..FilterSpec::default()
    };
    let view = filter::apply(store.records(), &spec);
    // Participants, not event entries.
    let participants = dedupe_per_games(&view);
    let rows = aggregate::veterans_by_country(&participants, threshold);

    if rows.is_empty() {
        println!("No records match.");
        return Ok(());
    }

    println!("  {:<28} {:>9}", "COUNTRY", "ATHLETES");
    println!("  {}", "-".repeat(38));
    for row in &rows {
        println!("  {:<28} {:>9}", row.country, row.count);
    }
    println!();
    println!("  Athletes aged {}+ per country", threshold);
    Ok(())
}
