//! Core data model for athlete-event records.
//!
//! These types represent the rows that flow from the CSV loader through
//! admission into the in-memory record store. The loader hands over
//! [`RawRow`]s with every field optional and untyped; admission (see
//! [`crate::store`]) decides which rows become typed
//! [`AthleteEventRecord`]s. Missing or malformed fields are a data-quality
//! concern resolved by exclusion, never by an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw athlete-event row as parsed from `athlete_events.csv`, before
/// admission. Column names follow the source file header.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(rename = "ID")]
    pub id: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Sex")]
    pub sex: Option<String>,
    #[serde(rename = "Age")]
    pub age: Option<String>,
    #[serde(rename = "Height")]
    pub height: Option<String>,
    #[serde(rename = "Weight")]
    pub weight: Option<String>,
    #[serde(rename = "NOC")]
    pub noc: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Season")]
    pub season: Option<String>,
    #[serde(rename = "Sport")]
    pub sport: Option<String>,
    #[serde(rename = "Event")]
    pub event: Option<String>,
    #[serde(rename = "Medal")]
    pub medal: Option<String>,
}

/// Raw `NOC,region` pair from `noc_regions.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRegion {
    #[serde(rename = "NOC")]
    pub noc: Option<String>,
    #[serde(rename = "region")]
    pub region: Option<String>,
}

/// Treat empty strings and the `NA` placeholder as absent.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    match value.as_deref().map(str::trim) {
        None | Some("") | Some("NA") => None,
        Some(s) => Some(s),
    }
}

/// Athlete sex as recorded in the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Summer or Winter edition of the Games.
///
/// An absent season defaults to `Summer`, matching the dominant share of the
/// source data. This is a known approximation; no year-based heuristic is
/// applied because divisibility rules are wrong for post-1994 Winter Games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("Winter") => Season::Winter,
            _ => Season::Summer,
        }
    }
}

/// Medal value of a single event entry. Absence means no medal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Gold" => Some(Medal::Gold),
            "Silver" => Some(Medal::Silver),
            "Bronze" => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

/// One admitted athlete-per-event entry.
///
/// Immutable after construction: the resolved `country` name is fixed at
/// build time as a pure function of the NOC code and the region table.
/// Which optional fields are guaranteed present depends on the admission
/// path that produced the record (see [`crate::store::RecordStore`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteEventRecord {
    pub athlete_id: i64,
    pub name: String,
    pub sex: Option<Sex>,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub noc: String,
    /// Resolved display name; falls back to the NOC code itself when the
    /// region table has no mapping.
    pub country: String,
    pub year: i32,
    pub season: Season,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
}

/// Mapping from NOC code to display country name.
///
/// Many-to-one: historical NOC codes of dissolved states can share a region.
/// Lookups for unmapped codes degrade to the code itself.
#[derive(Debug, Clone, Default)]
pub struct RegionMap {
    regions: HashMap<String, String>,
}

impl RegionMap {
    /// Build from raw `NOC,region` pairs; pairs without a code or a region
    /// name are skipped.
    pub fn from_pairs(pairs: &[RawRegion]) -> Self {
        let mut regions = HashMap::new();
        for pair in pairs {
            if let (Some(noc), Some(region)) = (present(&pair.noc), present(&pair.region)) {
                regions.insert(noc.to_string(), region.to_string());
            }
        }
        Self { regions }
    }

    /// Resolve a NOC code to its display name, identity fallback on a miss.
    pub fn resolve<'a>(&'a self, noc: &'a str) -> &'a str {
        self.regions.get(noc).map(String::as_str).unwrap_or(noc)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
