//! Single-pass per-country summary reducer.
//!
//! Folds the full, unfiltered row set into one [`CountrySummary`] per NOC:
//! medal tallies, unique-athlete count, and the country's most common sport.
//! The output is published as a static JSON artifact keyed by NOC code.
//!
//! This reducer has its own admission (`id` and `noc` present) deliberately
//! looser than the record store's age view, so athletes without a recorded
//! age still count toward medals and athlete totals.

use crate::aggregate::arg_max_first_seen;
use crate::record::{present, Medal, RawRow, RegionMap};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Medal tallies for one NOC, counted per event entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MedalTally {
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
}

impl MedalTally {
    pub fn total(&self) -> u64 {
        self.gold + self.silver + self.bronze
    }
}

/// Published per-country summary. The athlete-id set and per-sport counts
/// used during the fold are build-time scratch state, not part of this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountrySummary {
    pub noc: String,
    pub region: String,
    pub medals: MedalTally,
    pub total_athletes: u64,
    pub top_sport: Option<String>,
}

/// Per-NOC accumulator. `sport_counts` keeps first-encounter order so the
/// top-sport tie-break is reproducible.
#[derive(Default)]
struct NocScratch {
    medals: MedalTally,
    athletes: HashSet<i64>,
    sport_counts: Vec<(String, u64)>,
    sport_index: HashMap<String, usize>,
}

impl NocScratch {
    fn count_sport(&mut self, sport: &str) {
        match self.sport_index.get(sport) {
            Some(&slot) => self.sport_counts[slot].1 += 1,
            None => {
                self.sport_index.insert(sport.to_string(), self.sport_counts.len());
                self.sport_counts.push((sport.to_string(), 1));
            }
        }
    }
}

/// Fold all rows into a NOC-keyed summary mapping.
///
/// Single pass; rows without an `id` or `noc` are skipped. `total_athletes`
/// is the cardinality of the distinct athlete-id set, never the raw record
/// count. `top_sport` is the arg-max over per-sport record counts with
/// first-seen tie-break; `None` when a NOC has no sport values at all.
pub fn reduce(rows: &[RawRow], regions: &RegionMap) -> BTreeMap<String, CountrySummary> {
    let mut scratch: HashMap<String, NocScratch> = HashMap::new();
    // NOC first-seen order is irrelevant to the output (BTreeMap sorts),
    // but per-NOC sport order must follow row order.
    for row in rows {
        let Some(noc) = present(&row.noc) else { continue };
        let Some(id) = present(&row.id).and_then(|s| s.parse::<i64>().ok()) else {
            continue;
        };

        let entry = scratch.entry(noc.to_string()).or_default();
        entry.athletes.insert(id);
        match present(&row.medal).and_then(Medal::parse) {
            Some(Medal::Gold) => entry.medals.gold += 1,
            Some(Medal::Silver) => entry.medals.silver += 1,
            Some(Medal::Bronze) => entry.medals.bronze += 1,
            None => {}
        }
        if let Some(sport) = present(&row.sport) {
            entry.count_sport(sport);
        }
    }

    scratch
        .into_iter()
        .map(|(noc, entry)| {
            let top_sport = arg_max_first_seen(&entry.sport_counts).cloned();
            let summary = CountrySummary {
                region: regions.resolve(&noc).to_string(),
                medals: entry.medals,
                total_athletes: entry.athletes.len() as u64,
                top_sport,
                noc: noc.clone(),
            };
            (noc, summary)
        })
        .collect()
}
