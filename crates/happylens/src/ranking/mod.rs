pub mod input;

pub use input::{PresetWeights, PromptWeightSource, WeightInputError, WeightSource};

use crate::dataset::{CountryRecord, Factor};
use serde::Serialize;
use std::cmp::Ordering;

/// Maximum number of entries in a ranked result.
pub const TOP_N: usize = 10;

/// Weight a slider or prompt starts from.
pub const DEFAULT_WEIGHT: f64 = 0.5;

/// Raised when a weight falls outside the inclusive `[0, 1]` range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("weight for {factor} must lie within [0, 1], got {value}")]
pub struct InvalidWeight {
    pub factor: Factor,
    pub value: f64,
}

/// Personal importance weights for the six factors.
///
/// A value of this type always covers all six factors and every weight lies
/// within `[0, 1]` inclusive; both constructors enforce it. Values are stored
/// in the canonical [`Factor::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightVector {
    values: [f64; Factor::COUNT],
}

impl WeightVector {
    /// Build a vector from values in canonical factor order.
    pub fn new(values: [f64; Factor::COUNT]) -> Result<Self, InvalidWeight> {
        for (factor, value) in Factor::ALL.into_iter().zip(values) {
            if !(0.0..=1.0).contains(&value) {
                return Err(InvalidWeight { factor, value });
            }
        }
        Ok(Self { values })
    }

    /// Assign the same weight to every factor.
    pub fn uniform(value: f64) -> Result<Self, InvalidWeight> {
        Self::new([value; Factor::COUNT])
    }

    pub fn get(&self, factor: Factor) -> f64 {
        self.values[factor as usize]
    }

    pub(crate) fn from_validated(values: [f64; Factor::COUNT]) -> Self {
        Self { values }
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            values: [DEFAULT_WEIGHT; Factor::COUNT],
        }
    }
}

/// One row of a ranked result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub country: String,
    pub happiness_score: f64,
    pub score: f64,
}

/// Rank `records` by weighted composite score, descending, top 10.
///
/// A record with any missing factor gets a NaN composite score and sorts
/// after every numeric score; the weighted term is not zeroed out. Ties keep
/// the original row order. Pure: malformed data degrades per row, it never
/// fails.
pub fn rank(records: &[CountryRecord], weights: &WeightVector) -> Vec<RankedEntry> {
    let mut scored: Vec<(&CountryRecord, f64)> = records
        .iter()
        .map(|record| (record, composite_score(record, weights)))
        .collect();

    scored.sort_by(|a, b| compare_descending(a.1, b.1));

    scored
        .into_iter()
        .take(TOP_N)
        .map(|(record, score)| RankedEntry {
            country: record.country.clone(),
            happiness_score: record.happiness_score,
            score,
        })
        .collect()
}

/// Weighted sum over the six factors; NaN when any factor is missing.
pub fn composite_score(record: &CountryRecord, weights: &WeightVector) -> f64 {
    Factor::ALL
        .into_iter()
        .map(|factor| record.factor(factor).unwrap_or(f64::NAN) * weights.get(factor))
        .sum()
}

fn compare_descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        // NaN composites rank below every numeric score.
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
