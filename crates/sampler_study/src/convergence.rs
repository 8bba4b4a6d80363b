//! Single-seed convergence across sample sizes.
//!
//! Runs one trial per sample size, each with a fresh generator seeded
//! identically, and reports how far each frequency table sits from the fair
//! die. This is the table-per-size view of the standard report.

use crate::error::StudyError;
use crate::{DEFAULT_SAMPLE_SIZES, DEFAULT_SEED};
use sampler_core::{FrequencyTable, Seed, TrialRequest};
use serde::Serialize;

/// Result of one trial in a convergence study.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergencePoint {
    /// Number of draws
    pub sample_count: u64,
    /// Seed of the trial
    pub seed: Seed,
    /// Frequency table of the trial
    pub table: FrequencyTable,
    /// |sample mean − 3.5|
    pub abs_mean_error: f64,
    /// max |p − 1/6| over the faces
    pub max_probability_deviation: f64,
}

/// One trial per sample size, all from the same seed.
///
/// # Examples
/// ```
/// use sampler_study::ConvergenceStudy;
///
/// let points = ConvergenceStudy::new(vec![10, 100], 345).run().unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].table.sample_count(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvergenceStudy {
    sample_sizes: Vec<i64>,
    seed: Seed,
}

impl ConvergenceStudy {
    /// Study over `sample_sizes` (in the given order) with `seed`.
    pub fn new(sample_sizes: Vec<i64>, seed: impl Into<Seed>) -> Self {
        Self {
            sample_sizes,
            seed: seed.into(),
        }
    }

    /// Sample sizes 10 through 100,000 with seed 345.
    pub fn standard() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZES.to_vec(), DEFAULT_SEED)
    }

    /// Sample sizes of the study.
    pub fn sample_sizes(&self) -> &[i64] {
        &self.sample_sizes
    }

    /// Seed shared by every trial.
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Run every trial.
    ///
    /// All sample sizes are validated before the first draw, so an invalid
    /// size anywhere in the ladder yields an error and no points.
    pub fn run(&self) -> Result<Vec<ConvergencePoint>, StudyError> {
        if self.sample_sizes.is_empty() {
            return Err(StudyError::invalid_argument(
                "convergence study needs at least one sample size",
            ));
        }

        let requests = self
            .sample_sizes
            .iter()
            .map(|&n| TrialRequest::new(n, self.seed))
            .collect::<Result<Vec<_>, _>>()?;

        let points: Vec<ConvergencePoint> = requests
            .iter()
            .map(|request| {
                let table = request.run();
                let point = ConvergencePoint {
                    sample_count: request.sample_count(),
                    seed: request.seed(),
                    abs_mean_error: table.mean_deviation().abs(),
                    max_probability_deviation: table.max_probability_deviation(),
                    table,
                };
                tracing::debug!(
                    sample_count = point.sample_count,
                    sample_mean = point.table.sample_mean(),
                    abs_mean_error = point.abs_mean_error,
                    "convergence trial complete"
                );
                point
            })
            .collect();

        tracing::info!(
            seed = %self.seed,
            trials = points.len(),
            "convergence study complete"
        );

        Ok(points)
    }
}

impl Default for ConvergenceStudy {
    fn default() -> Self {
        Self::standard()
    }
}
