//! Declarative multi-attribute filter over athlete-event records.
//!
//! A [`FilterSpec`] is an immutable value object describing the user's
//! current selection; [`apply`] evaluates it in a single linear pass with no
//! side effects. Unset fields do not constrain, all set fields combine with
//! logical AND, input order is preserved, and an empty result set is a valid
//! outcome rather than an error.

use crate::record::{AthleteEventRecord, Medal};

/// Medal constraint. `Any` requires a present medal value (the source data's
/// `NA` placeholder counts as absent), `Only` requires an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MedalFilter {
    #[default]
    All,
    Any,
    Only(Medal),
}

/// One filter configuration. `None` fields pass everything.
///
/// Range bounds are inclusive; an inverted range (`min > max`) is normalized
/// by swapping, never treated as an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub year: Option<i32>,
    pub sport: Option<String>,
    pub country: Option<String>,
    pub medal: MedalFilter,
    pub age_min: Option<f64>,
    pub age_max: Option<f64>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
}

impl FilterSpec {
    fn age_bounds(&self) -> (Option<f64>, Option<f64>) {
        normalize_bounds(self.age_min, self.age_max)
    }

    fn year_bounds(&self) -> (Option<i32>, Option<i32>) {
        normalize_bounds(self.year_min, self.year_max)
    }
}

fn normalize_bounds<T: PartialOrd + Copy>(min: Option<T>, max: Option<T>) -> (Option<T>, Option<T>) {
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
        other => other,
    }
}

/// Evaluate `spec` against `records`: a pure, stable, linear predicate pass.
pub fn apply(records: &[AthleteEventRecord], spec: &FilterSpec) -> Vec<AthleteEventRecord> {
    records
        .iter()
        .filter(|r| matches(r, spec))
        .cloned()
        .collect()
}

fn matches(record: &AthleteEventRecord, spec: &FilterSpec) -> bool {
    if let Some(year) = spec.year {
        if record.year != year {
            return false;
        }
    }
    if let Some(ref sport) = spec.sport {
        if record.sport != *sport {
            return false;
        }
    }
    if let Some(ref country) = spec.country {
        if record.country != *country {
            return false;
        }
    }
    match spec.medal {
        MedalFilter::All => {}
        MedalFilter::Any => {
            if record.medal.is_none() {
                return false;
            }
        }
        MedalFilter::Only(medal) => {
            if record.medal != Some(medal) {
                return false;
            }
        }
    }

    let (age_min, age_max) = spec.age_bounds();
    if age_min.is_some() || age_max.is_some() {
        // A record with no recorded age cannot satisfy an age bound.
        let Some(age) = record.age else { return false };
        if age_min.is_some_and(|lo| age < lo) || age_max.is_some_and(|hi| age > hi) {
            return false;
        }
    }

    let (year_min, year_max) = spec.year_bounds();
    if year_min.is_some_and(|lo| record.year < lo) || year_max.is_some_and(|hi| record.year > hi) {
        return false;
    }

    true
}
