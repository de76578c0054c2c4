//! # Olympic Lens CLI (`olens`)
//!
//! The `olens` binary is the primary interface for Olympic Lens. It loads
//! the athlete-event and region CSV files named in the configuration and
//! answers aggregate queries over them.
//!
//! ## Usage
//!
//! ```bash
//! olens --config ./config/olens.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `olens stats` | Dataset overview: row counts, views, catalogs |
//! | `olens ages histogram` | Age distribution with medalist counts |
//! | `olens ages rates` | Medal rates by age bucket |
//! | `olens ages by-sport` | Sports ranked by mean athlete age |
//! | `olens ages trend` | Youngest/oldest/mean age per Games year |
//! | `olens ages veterans` | Countries ranked by athletes over a threshold |
//! | `olens gender timeline` | Male/female participation per year |
//! | `olens gender sports` | Sports ranked by female participation share |
//! | `olens countries list` | All selectable countries |
//! | `olens countries suggest "<prefix>"` | Typeahead suggestions |
//! | `olens countries resolve "<name>"` | Resolve a name to a filter id |
//! | `olens summary` | Per-country summary JSON artifact |
//!
//! ## Examples
//!
//! ```bash
//! # Dataset overview
//! olens stats --config ./config/olens.toml
//!
//! # Age distribution for one sport at one Games
//! olens ages histogram --sport Gymnastics --year 2016
//!
//! # Medal rates across all years
//! olens ages rates
//!
//! # Gender timeline for one country
//! olens gender timeline --country Japan
//!
//! # Write the summary artifact
//! olens summary --output out/noc_summary.json
//! ```

mod ages;
mod config;
mod countries;
mod gender;
mod loader;
mod stats;
mod summary_cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Olympic Lens CLI — an aggregation and query engine for the historical
/// Olympic Games athlete dataset.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/olens.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "olens",
    about = "Olympic Lens — aggregate queries over the historical Olympic athlete dataset",
    version,
    long_about = "Olympic Lens loads the athlete-event and NOC region CSV files into typed \
    in-memory views and answers filtered aggregate queries: age distributions and medal rates, \
    gender participation timelines, per-sport and per-year age statistics, veteran rankings, \
    and a per-country summary artifact."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/olens.toml`. The data file paths and
    /// aggregation floors are read from this file.
    #[arg(long, global = true, default_value = "./config/olens.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Print a dataset overview.
    ///
    /// Shows raw row counts, how many rows each admission policy retained,
    /// unique athletes, Games participations, and catalog sizes. Useful for
    /// verifying the source files before digging into the aggregate views.
    Stats,

    /// Age-centric queries (histogram, rates, per-sport, trend, veterans).
    Ages {
        #[command(subcommand)]
        view: AgesView,
    },

    /// Gender participation queries.
    Gender {
        #[command(subcommand)]
        view: GenderView,
    },

    /// Country catalog, typeahead suggestions, and name resolution.
    Countries {
        #[command(subcommand)]
        action: CountriesAction,
    },

    /// Build the per-country summary artifact.
    ///
    /// Emits a NOC-keyed JSON object with medal tallies, unique-athlete
    /// counts, and each country's most-entered sport.
    Summary {
        /// Write the JSON artifact to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Age-view subcommands.
#[derive(Subcommand)]
enum AgesView {
    /// Age distribution with medalist counts per bucket.
    ///
    /// Buckets are whole years (ages are floored). Filters combine with
    /// AND semantics; an empty selection prints a message, not an error.
    Histogram {
        /// Restrict to one sport (exact name, e.g. `Judo`).
        #[arg(long)]
        sport: Option<String>,

        /// Restrict to one Games year (e.g. `2016`).
        #[arg(long)]
        year: Option<i32>,

        /// Lower age bound, inclusive.
        #[arg(long)]
        min_age: Option<f64>,

        /// Upper age bound, inclusive.
        #[arg(long)]
        max_age: Option<f64>,

        /// Medal constraint: `all`, `any`, or an exact medal
        /// (`Gold`, `Silver`, `Bronze`).
        #[arg(long, default_value = "all")]
        medal: String,
    },

    /// Medal rates (gold/silver/bronze percentages) by age bucket.
    Rates {
        /// Restrict to one sport (exact name).
        #[arg(long)]
        sport: Option<String>,

        /// Restrict to one Games year.
        #[arg(long)]
        year: Option<i32>,
    },

    /// Sports ranked by mean athlete age.
    ///
    /// Sports with fewer records than the minimum sample are excluded so
    /// tiny disciplines don't dominate the extremes.
    BySport {
        /// Override the minimum sample size from config.
        #[arg(long)]
        min_sample: Option<usize>,
    },

    /// Youngest, oldest, and mean age per Games year.
    Trend {
        /// First year to include, inclusive.
        #[arg(long)]
        from: Option<i32>,

        /// Last year to include, inclusive.
        #[arg(long)]
        to: Option<i32>,

        /// Override the minimum sample size from config.
        #[arg(long)]
        min_sample: Option<usize>,
    },

    /// Countries ranked by distinct athletes at or above an age threshold.
    Veterans {
        /// Age threshold, inclusive.
        #[arg(long, default_value_t = 40.0)]
        threshold: f64,

        /// Restrict to one Games year.
        #[arg(long)]
        year: Option<i32>,
    },
}

/// Gender-view subcommands.
#[derive(Subcommand)]
enum GenderView {
    /// Male/female participation per Games year, with female share.
    ///
    /// Counts participants (one per athlete per Games), not event entries.
    Timeline {
        /// Restrict to one country (display name, as listed by
        /// `countries list`).
        #[arg(long)]
        country: Option<String>,
    },

    /// Sports ranked by female participation share.
    Sports {
        /// Restrict to one Games year.
        #[arg(long)]
        year: Option<i32>,
    },
}

/// Country catalog subcommands.
#[derive(Subcommand)]
enum CountriesAction {
    /// List all selectable country options, sentinel first.
    List,

    /// Prefix-match suggestions for a partial country name.
    ///
    /// Matching is case-insensitive and anchored at the start of the name;
    /// an empty query returns nothing.
    Suggest {
        /// The partial country name.
        query: String,

        /// Override the maximum number of suggestions from config.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Resolve an exact country name to its filter id.
    ///
    /// Prints the country id on an exact (case-insensitive) match, or the
    /// `all` sentinel when nothing matches.
    Resolve {
        /// The full country name.
        query: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Stats => {
            stats::run_stats(&cfg)?;
        }
        Commands::Ages { view } => match view {
            AgesView::Histogram {
                sport,
                year,
                min_age,
                max_age,
                medal,
            } => {
                ages::run_histogram(&cfg, sport, year, min_age, max_age, &medal)?;
            }
            AgesView::Rates { sport, year } => {
                ages::run_rates(&cfg, sport, year)?;
            }
            AgesView::BySport { min_sample } => {
                ages::run_by_sport(&cfg, min_sample)?;
            }
            AgesView::Trend {
                from,
                to,
                min_sample,
            } => {
                ages::run_trend(&cfg, from, to, min_sample)?;
            }
            AgesView::Veterans { threshold, year } => {
                ages::run_veterans(&cfg, threshold, year)?;
            }
        },
        Commands::Gender { view } => match view {
            GenderView::Timeline { country } => {
                gender::run_timeline(&cfg, country)?;
            }
            GenderView::Sports { year } => {
                gender::run_sports(&cfg, year)?;
            }
        },
        Commands::Countries { action } => match action {
            CountriesAction::List => {
                countries::run_list(&cfg)?;
            }
            CountriesAction::Suggest { query, limit } => {
                countries::run_suggest(&cfg, &query, limit)?;
            }
            CountriesAction::Resolve { query } => {
                countries::run_resolve(&cfg, &query)?;
            }
        },
        Commands::Summary { output } => {
            summary_cmd::run_summary(&cfg, output.as_deref())?;
        }
    }

    Ok(())
}
