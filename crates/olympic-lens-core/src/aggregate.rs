//! Group-by/reduce pipelines over filtered record views.
//!
//! Every pipeline is a deterministic single-pass fold followed by a
//! deterministic sort: same input sequence (same order) produces
//! byte-identical output, including tie-break outcomes. Grouping preserves
//! first-encounter key order, which is what makes arg-max tie-breaks
//! reproducible — callers must feed records in loader row order.
//!
//! Four pipeline shapes cover every view:
//!
//! 1. distribution-by-bucket ([`age_distribution`])
//! 2. rate-by-bucket ([`medal_rates_by_age`], [`gender_share_by_sport`],
//!    [`gender_timeline`])
//! 3. ranked aggregate-by-group with a minimum-sample floor
//!    ([`age_stats_by_sport`], [`age_trend_by_year`])
//! 4. top-K / arg-max with first-seen tie-break ([`veterans_by_country`],
//!    [`arg_max_first_seen`])
//!
//! Degenerate inputs (empty filtered set, zero-count bucket) yield empty
//! collections; percentage math never divides by zero.

use crate::record::{AthleteEventRecord, Medal, Sex};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Fold records into groups keyed by `key_fn`, preserving the order in which
/// keys are first encountered. Records for which `key_fn` yields `None` are
/// skipped.
fn fold_groups<'a, K, F>(
    records: &'a [AthleteEventRecord],
    key_fn: F,
) -> Vec<(K, Vec<&'a AthleteEventRecord>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&AthleteEventRecord) -> Option<K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a AthleteEventRecord>)> = Vec::new();
    for record in records {
        let Some(key) = key_fn(record) else { continue };
        match index.get(&key) {
            Some(&slot) => groups[slot].1.push(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![record]));
            }
        }
    }
    groups
}

/// `part / total * 100`, rounded to one decimal; 0.0 when the numerator or
/// denominator is zero.
fn pct(part: u64, total: u64) -> f64 {
    if total == 0 || part == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Integer bucket key for a record's age.
fn age_bucket(record: &AthleteEventRecord) -> Option<i32> {
    record.age.map(|age| age.floor() as i32)
}

// ============ Distribution-by-bucket ============

/// One age histogram bucket: entries at that (floored) age, and how many of
/// them carried any medal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBucket {
    pub age: i32,
    pub count: u64,
    pub medal_count: u64,
}

/// Age histogram over a filtered view, ascending by bucket key.
pub fn age_distribution(records: &[AthleteEventRecord]) -> Vec<AgeBucket> {
    let mut buckets: Vec<AgeBucket> = fold_groups(records, age_bucket)
        .into_iter()
        .map(|(age, group)| AgeBucket {
            age,
            count: group.len() as u64,
            medal_count: group.iter().filter(|r| r.medal.is_some()).count() as u64,
        })
        .collect();
    buckets.sort_unstable_by_key(|b| b.age);
    buckets
}

// ============ Rate-by-bucket ============

/// Medal rates for one age bucket. Percentages are of all entries at that
/// age, rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedalRateRow {
    pub age: i32,
    pub total: u64,
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
    pub gold_pct: f64,
    pub silver_pct: f64,
    pub bronze_pct: f64,
}

/// Medal rate by age, ascending by age. Buckets with no entries cannot occur
/// by construction, so no divide-by-zero path exists.
pub fn medal_rates_by_age(records: &[AthleteEventRecord]) -> Vec<MedalRateRow> {
    let mut rows: Vec<MedalRateRow> = fold_groups(records, age_bucket)
        .into_iter()
        .map(|(age, group)| {
            let total = group.len() as u64;
            let tally = |medal: Medal| group.iter().filter(|r| r.medal == Some(medal)).count() as u64;
            let (gold, silver, bronze) = (tally(Medal::Gold), tally(Medal::Silver), tally(Medal::Bronze));
            MedalRateRow {
                age,
                total,
                gold,
                silver,
                bronze,
                gold_pct: pct(gold, total),
                silver_pct: pct(silver, total),
                bronze_pct: pct(bronze, total),
            }
        })
        .collect();
    rows.sort_unstable_by_key(|r| r.age);
    rows
}

/// Gender split for one sport, ranked by female share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderShareRow {
    pub sport: String,
    pub male: u64,
    pub female: u64,
    pub total: u64,
    pub female_pct: f64,
}

/// Female participation share per sport, descending by share (a ranking
/// view). Equal shares fall back to sport name for a stable order.
pub fn gender_share_by_sport(records: &[AthleteEventRecord]) -> Vec<GenderShareRow> {
    let mut rows: Vec<GenderShareRow> = fold_groups(records, |r| {
        r.sex.map(|_| r.sport.clone())
    })
    .into_iter()
    .map(|(sport, group)| {
        let male = group.iter().filter(|r| r.sex == Some(Sex::Male)).count() as u64;
        let female = group.iter().filter(|r| r.sex == Some(Sex::Female)).count() as u64;
        let total = male + female;
        GenderShareRow {
            sport,
            male,
            female,
            total,
            female_pct: pct(female, total),
        }
    })
    .filter(|row| row.total > 0)
    .collect();
    rows.sort_by(|a, b| {
        b.female_pct
            .total_cmp(&a.female_pct)
            .then_with(|| a.sport.cmp(&b.sport))
    });
    rows
}

/// Gender participation for one Games year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderYearRow {
    pub year: i32,
    pub male: u64,
    pub female: u64,
    pub total: u64,
    pub female_pct: f64,
}

/// Male/female participation per year, ascending by year (a time-indexed
/// view). Callers counting "participants" rather than "event entries"
/// should dedupe per Games first.
pub fn gender_timeline(records: &[AthleteEventRecord]) -> Vec<GenderYearRow> {
    let mut rows: Vec<GenderYearRow> = fold_groups(records, |r| r.sex.map(|_| r.year))
        .into_iter()
        .map(|(year, group)| {
            let male = group.iter().filter(|r| r.sex == Some(Sex::Male)).count() as u64;
            let female = group.iter().filter(|r| r.sex == Some(Sex::Female)).count() as u64;
            let total = male + female;
            GenderYearRow {
                year,
                male,
                female,
                total,
                female_pct: pct(female, total),
            }
        })
        .filter(|row| row.total > 0)
        .collect();
    rows.sort_unstable_by_key(|r| r.year);
    rows
}

// ============ Ranked aggregate-by-group ============

/// Age summary statistics for one sport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeStatsRow {
    pub sport: String,
    pub sample: u64,
    pub mean_age: f64,
    pub min_age: f64,
    pub max_age: f64,
}

/// Mean/min/max age per sport over a filtered view, ascending by mean age.
///
/// Groups with fewer than `min_sample` age-bearing records are excluded.
/// The floor is a data-quality policy, not an algorithmic constant, so it is
/// a parameter rather than a hardcoded value.
pub fn age_stats_by_sport(records: &[AthleteEventRecord], min_sample: usize) -> Vec<AgeStatsRow> {
    let mut rows: Vec<AgeStatsRow> = fold_groups(records, |r| {
        r.age.map(|_| r.sport.clone())
    })
    .into_iter()
    .filter(|(_, group)| group.len() >= min_sample)
    .map(|(sport, group)| {
        let stats = AgeSpread::over(&group);
        AgeStatsRow {
            sport,
            sample: group.len() as u64,
            mean_age: stats.mean,
            min_age: stats.min,
            max_age: stats.max,
        }
    })
    .collect();
    rows.sort_by(|a, b| {
        a.mean_age
            .total_cmp(&b.mean_age)
            .then_with(|| a.sport.cmp(&b.sport))
    });
    rows
}

/// Youngest/oldest/mean age for one Games year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeTrendRow {
    pub year: i32,
    pub sample: u64,
    pub youngest: f64,
    pub oldest: f64,
    pub mean_age: f64,
}

/// Per-year age spread, ascending by year. Years with fewer than
/// `min_sample` age-bearing records are excluded.
pub fn age_trend_by_year(records: &[AthleteEventRecord], min_sample: usize) -> Vec<AgeTrendRow> {
    let mut rows: Vec<AgeTrendRow> = fold_groups(records, |r| r.age.map(|_| r.year))
        .into_iter()
        .filter(|(_, group)| group.len() >= min_sample)
        .map(|(year, group)| {
            let stats = AgeSpread::over(&group);
            AgeTrendRow {
                year,
                sample: group.len() as u64,
                youngest: stats.min,
                oldest: stats.max,
                mean_age: stats.mean,
            }
        })
        .collect();
    rows.sort_unstable_by_key(|r| r.year);
    rows
}

struct AgeSpread {
    mean: f64,
    min: f64,
    max: f64,
}

impl AgeSpread {
    /// Mean via sum/count, plus min and max, over a group known to carry
    /// ages (the grouping key functions guarantee it).
    fn over(group: &[&AthleteEventRecord]) -> Self {
        let ages: Vec<f64> = group.iter().filter_map(|r| r.age).collect();
        let sum: f64 = ages.iter().sum();
        let mean = sum / ages.len() as f64;
        let min = ages.iter().copied().fold(f64::INFINITY, f64::min);
        let max = ages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self { mean, min, max }
    }
}

// ============ Top-K / arg-max ============

/// Distinct-athlete count for one country among veteran athletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VeteranRow {
    pub country: String,
    pub count: u64,
}

/// Countries ranked by how many distinct athletes competed at or above
/// `age_threshold`, descending by count. Equal counts fall back to country
/// name for a stable order.
pub fn veterans_by_country(records: &[AthleteEventRecord], age_threshold: f64) -> Vec<VeteranRow> {
    let mut rows: Vec<VeteranRow> = fold_groups(records, |r| {
        match r.age {
            Some(age) if age >= age_threshold => Some(r.country.clone()),
            _ => None,
        }
    })
    .into_iter()
    .map(|(country, group)| {
        let athletes: HashSet<i64> = group.iter().map(|r| r.athlete_id).collect();
        VeteranRow {
            country,
            count: athletes.len() as u64,
        }
    })
    .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));
    rows
}

/// Arg-max over `(key, count)` pairs. Ties keep the first-encountered key,
/// a deliberate, reproducible tie-break given a stable input order.
pub fn arg_max_first_seen<K>(counts: &[(K, u64)]) -> Option<&K> {
    let mut best: Option<(&K, u64)> = None;
    for (key, count) in counts {
        if best.map_or(true, |(_, best_count)| *count > best_count) {
            best = Some((key, *count));
        }
    }
    best.map(|(key, _)| key)
}
