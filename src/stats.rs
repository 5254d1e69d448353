use crate::models::FlatUser;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Descriptive statistics for the `age` column.
///
/// Matches the usual dataframe `describe()` output: count, mean, sample
/// standard deviation, min, quartiles, max. Aggregates are `None` when there
/// are no rows (`std` additionally needs at least two).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgeSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Quantile with linear interpolation between closest ranks.
/// `sorted` must be ascending and non-empty, `q` in 0..=1.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (pos - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

/// Compute descriptive statistics over the `age` column.
pub fn describe_ages(users: &[FlatUser]) -> AgeSummary {
    let mut ages: Vec<f64> = users.iter().map(|u| f64::from(u.age)).collect();
    ages.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let count = ages.len();

    if count == 0 {
        return AgeSummary {
            count,
            mean: None,
            std: None,
            min: None,
            q25: None,
            median: None,
            q75: None,
            max: None,
        };
    }

    let mean = ages.iter().copied().sum::<f64>() / count as f64;
    let std = if count > 1 {
        let var = ages.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        Some(var.sqrt())
    } else {
        None
    };

    AgeSummary {
        count,
        mean: Some(mean),
        std,
        min: ages.first().copied(),
        q25: Some(quantile(&ages, 0.25)),
        median: Some(quantile(&ages, 0.50)),
        q75: Some(quantile(&ages, 0.75)),
        max: ages.last().copied(),
    }
}

/// Percentage share of each distinct `gender` value, descending by share
/// (ties broken by name). Shares sum to 100 for non-empty input, up to
/// floating-point rounding.
pub fn gender_distribution(users: &[FlatUser]) -> Vec<(String, f64)> {
    let counts = value_counts(users.iter().map(|u| u.gender.as_str()));
    let total = users.len() as f64;
    counts
        .into_iter()
        .map(|(value, n)| (value, n as f64 / total * 100.0))
        .collect()
}

/// Absolute occurrence count of each distinct `country` value, descending
/// by count (ties broken by name). Counts sum to the record total.
pub fn country_counts(users: &[FlatUser]) -> Vec<(String, usize)> {
    value_counts(users.iter().map(|u| u.country.as_str()))
}

fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(v, n)| (v.to_string(), n))
        .collect();
    // BTreeMap iteration already ordered names ascending, so the sort is
    // stable on count alone.
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}
