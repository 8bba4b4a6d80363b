//! Frequency tables produced by a trial.
//!
//! A table covers every face of the population, including faces that were
//! never drawn. Tables are built once, in one pass, and are read-only
//! afterwards.

use crate::population::{Population, FACE_COUNT};
use std::collections::BTreeMap;

/// One row of a frequency table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FaceFrequency {
    /// Face value
    pub value: u8,
    /// Face label
    pub label: &'static str,
    /// Number of draws showing this face
    pub count: u64,
    /// `count / sample_count`
    pub probability: f64,
}

/// Outcome counts, empirical probabilities and sample mean of one trial.
///
/// # Invariants
/// - All six faces are keys of both `counts` and `probabilities`
/// - Counts sum to `sample_count`
/// - Probabilities sum to 1 within floating-point tolerance
/// - `sample_mean` lies in `[1, 6]`
///
/// # Examples
/// ```
/// use sampler_core::run_trial;
///
/// let table = run_trial(100, 345).unwrap();
/// assert_eq!(table.sample_count(), 100);
/// assert_eq!(table.counts().len(), 6);
/// assert_eq!(table.rows().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrequencyTable {
    sample_count: u64,
    counts: BTreeMap<u8, u64>,
    probabilities: BTreeMap<u8, f64>,
    sample_mean: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    population: Population,
}

impl FrequencyTable {
    /// Freeze a tally into a table.
    ///
    /// `tally[i]` is the count for the `i`-th outcome of `population`. The
    /// caller guarantees at least one draw.
    pub(crate) fn from_tally(population: Population, tally: [u64; FACE_COUNT]) -> Self {
        let sample_count: u64 = tally.iter().sum();
        debug_assert!(sample_count > 0, "frequency table needs at least one draw");
        let n = sample_count as f64;

        let mut counts = BTreeMap::new();
        let mut probabilities = BTreeMap::new();
        let mut sample_mean = 0.0;
        for (outcome, &count) in population.outcomes().iter().zip(tally.iter()) {
            let probability = count as f64 / n;
            counts.insert(outcome.value, count);
            probabilities.insert(outcome.value, probability);
            sample_mean += f64::from(outcome.value) * probability;
        }

        Self {
            sample_count,
            counts,
            probabilities,
            sample_mean,
            population,
        }
    }

    /// Number of draws in the trial.
    #[inline]
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Counts keyed by face value.
    #[inline]
    pub fn counts(&self) -> &BTreeMap<u8, u64> {
        &self.counts
    }

    /// Empirical probabilities keyed by face value.
    #[inline]
    pub fn probabilities(&self) -> &BTreeMap<u8, f64> {
        &self.probabilities
    }

    /// Count for one face; `None` if `value` is not a face.
    pub fn count(&self, value: u8) -> Option<u64> {
        self.counts.get(&value).copied()
    }

    /// Empirical probability for one face; `None` if `value` is not a face.
    pub fn probability(&self, value: u8) -> Option<f64> {
        self.probabilities.get(&value).copied()
    }

    /// Σ value × probability.
    #[inline]
    pub fn sample_mean(&self) -> f64 {
        self.sample_mean
    }

    /// Signed distance of the sample mean from the expected value.
    pub fn mean_deviation(&self) -> f64 {
        self.sample_mean - self.population.expected_value()
    }

    /// Largest absolute distance of any empirical probability from 1/6.
    pub fn max_probability_deviation(&self) -> f64 {
        let p = self.population.true_probability();
        self.probabilities
            .values()
            .map(|q| (q - p).abs())
            .fold(0.0, f64::max)
    }

    /// Rows in ascending face order.
    pub fn rows(&self) -> Vec<FaceFrequency> {
        self.population
            .outcomes()
            .iter()
            .map(|outcome| FaceFrequency {
                value: outcome.value,
                label: outcome.label,
                count: self.counts[&outcome.value],
                probability: self.probabilities[&outcome.value],
            })
            .collect()
    }

    /// Population the table was drawn from.
    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }
}
