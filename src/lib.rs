//! # Olympic Lens
//!
//! An aggregation and query engine for the historical Olympic Games
//! athlete dataset (120 years of athlete-event rows plus a NOC region
//! table).
//!
//! Olympic Lens loads the raw CSV files once, admits rows into typed
//! in-memory views, and answers filtered aggregate queries: age
//! distributions and medal rates, gender participation timelines,
//! per-sport and per-year age statistics, veteran-athlete rankings, and a
//! per-country summary artifact.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌─────────────┐
//! │  CSV files  │──▶│ RecordStore  │──▶│ FilterSpec  │
//! │ rows+regions│   │ typed views  │   │ AND matcher │
//! └─────────────┘   └──────────────┘   └─────┬───────┘
//!                                            │
//!                        ┌───────────────────┤
//!                        ▼                   ▼
//!                  ┌───────────┐       ┌───────────┐
//!                  │ aggregate │       │  summary  │
//!                  │  tables   │       │   JSON    │
//!                  └───────────┘       └───────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! olens stats                          # dataset overview
//! olens ages histogram --sport Judo    # age distribution
//! olens gender timeline --country Japan
//! olens countries suggest "it"         # typeahead
//! olens summary --output noc_summary.json
//! ```
//!
//! The pure data-model and aggregation code lives in the
//! `olympic-lens-core` crate; this crate adds configuration, CSV loading,
//! and the command implementations.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`loader`] | CSV deserialization into raw rows |
//! | [`stats`] | Dataset overview command |
//! | [`ages`] | Age histogram, medal rates, sport/year stats, veterans |
//! | [`gender`] | Gender participation timeline and per-sport shares |
//! | [`countries`] | Country catalog, suggestions, resolution |
//! | [`summary_cmd`] | Per-country summary JSON artifact |

pub mod ages;
pub mod config;
pub mod countries;
pub mod gender;
pub mod loader;
pub mod stats;
pub mod summary_cmd;
