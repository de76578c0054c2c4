//! In-memory record store with per-view admission policies.
//!
//! A [`RecordStore`] is built once per session from the raw loader rows and
//! is read-only afterward. Two admission policies exist and must stay
//! distinct:
//!
//! - the **age view** requires `id`, `noc`, `year`, and a numeric `age`
//!   (age-centric pipelines depend on every record having an age);
//! - the **gender view** requires `id`, `noc`, `year`, `sex`, and `sport`,
//!   and tolerates a missing age (participation pipelines must include
//!   athletes who never recorded one).
//!
//! Rows failing admission are dropped silently; a malformed row is a
//! data-quality fact, not an error. Record order follows loader row order,
//! which downstream tie-breaks rely on.

use crate::record::{present, AthleteEventRecord, Medal, RawRow, RegionMap, Season, Sex};
use crate::search::CountryOption;
use std::collections::HashSet;

/// The immutable, normalized record sequence for one session.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<AthleteEventRecord>,
}

impl RecordStore {
    /// Build the age-centric view: rows missing any of `{id, noc, year, age}`
    /// (or with a non-numeric age) are dropped entirely.
    pub fn build_age_view(rows: &[RawRow], regions: &RegionMap) -> Self {
        let records = rows
            .iter()
            .filter_map(|row| {
                let record = convert(row, regions)?;
                record.age?;
                Some(record)
            })
            .collect();
        Self { records }
    }

    /// Build the gender-centric view: rows must carry `{id, noc, year, sex,
    /// sport}`; age may be absent.
    pub fn build_gender_view(rows: &[RawRow], regions: &RegionMap) -> Self {
        let records = rows
            .iter()
            .filter_map(|row| {
                let record = convert(row, regions)?;
                record.sex?;
                if record.sport.is_empty() {
                    return None;
                }
                Some(record)
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[AthleteEventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted unique competition years.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .records
            .iter()
            .map(|r| r.year)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        years.sort_unstable();
        years
    }

    /// Sorted unique sport names.
    pub fn sports(&self) -> Vec<String> {
        let mut sports: Vec<String> = self
            .records
            .iter()
            .map(|r| r.sport.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        sports.sort_unstable();
        sports
    }

    /// Country options for the presentation boundary: the "all countries"
    /// sentinel first, then resolved display names in alphabetical order.
    pub fn country_options(&self) -> Vec<CountryOption> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .map(|r| r.country.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        names.sort_unstable();

        let mut options = Vec::with_capacity(names.len() + 1);
        options.push(CountryOption::all());
        options.extend(names.into_iter().map(CountryOption::named));
        options
    }
}

/// Collapse multiple rows sharing `(athlete_id, year)` into one
/// representative record, first-seen wins.
///
/// Views that count "participants" rather than "event entries" use this to
/// avoid over-counting athletes who competed in several events at the same
/// Games.
pub fn dedupe_per_games(records: &[AthleteEventRecord]) -> Vec<AthleteEventRecord> {
    let mut seen: HashSet<(i64, i32)> = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert((r.athlete_id, r.year)))
        .cloned()
        .collect()
}

/// Shared field typing for both admission paths. Returns `None` when a field
/// required by *every* view (`id`, `noc`, `year`) is missing or malformed;
/// view-specific requirements are checked by the callers.
fn convert(row: &RawRow, regions: &RegionMap) -> Option<AthleteEventRecord> {
    let athlete_id = present(&row.id)?.parse::<i64>().ok()?;
    let noc = present(&row.noc)?.to_string();
    let year = present(&row.year)?.parse::<i32>().ok()?;

    let country = regions.resolve(&noc).to_string();
    Some(AthleteEventRecord {
        athlete_id,
        name: present(&row.name).unwrap_or_default().to_string(),
        sex: present(&row.sex).and_then(Sex::parse),
        age: present(&row.age).and_then(|s| s.parse::<f64>().ok()),
        height: present(&row.height).and_then(|s| s.parse::<f64>().ok()),
        weight: present(&row.weight).and_then(|s| s.parse::<f64>().ok()),
        noc,
        country,
        year,
        season: Season::parse(present(&row.season)),
        sport: present(&row.sport).unwrap_or_default().to_string(),
        event: present(&row.event).unwrap_or_default().to_string(),
        medal: present(&row.medal).and_then(Medal::parse),
    })
}
