//! Many-seed dispersion of the sample mean.
//!
//! For each sample size `N` the study runs `replications` trials, each from its
//! own seed, and measures the standard deviation of their sample means. The law
//! of large numbers predicts that spread shrinks as `1/sqrt(N)`; the
//! theoretical standard error of a fair-die mean is `sqrt(35/12 / N)`.
//!
//! Seeds are `base_seed + k` (wrapping), with `k` running over every
//! `(sample size, replication)` pair, so no two trials share a stream.

use crate::error::StudyError;
use crate::stats::RunningStats;
use crate::{DEFAULT_SAMPLE_SIZES, DEFAULT_SEED};
use rayon::prelude::*;
use sampler_core::{Population, Seed, TrialRequest};
use serde::Serialize;

/// Replications per sample size of the standard report.
pub const DEFAULT_REPLICATIONS: usize = 200;

/// Spread of sample means at one sample size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DispersionPoint {
    /// Number of draws per trial
    pub sample_count: u64,
    /// Number of trials
    pub replications: usize,
    /// Average of the sample means
    pub mean_of_means: f64,
    /// Bessel-corrected standard deviation of the sample means
    pub std_dev: f64,
    /// `sqrt(35/12 / N)`
    pub theoretical_std_error: f64,
}

impl DispersionPoint {
    /// Observed spread over theoretical standard error; close to 1 for a fair die.
    pub fn std_error_ratio(&self) -> f64 {
        self.std_dev / self.theoretical_std_error
    }
}

/// Replicated trials per sample size.
///
/// # Examples
/// ```
/// use sampler_study::DispersionStudy;
///
/// let points = DispersionStudy::new(vec![10, 1_000], 50, 1).run().unwrap();
/// assert!(points[0].std_dev > points[1].std_dev);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispersionStudy {
    sample_sizes: Vec<i64>,
    replications: usize,
    base_seed: Seed,
}

impl DispersionStudy {
    /// Study over `sample_sizes` with `replications` trials each.
    pub fn new(
        sample_sizes: Vec<i64>,
        replications: usize,
        base_seed: impl Into<Seed>,
    ) -> Self {
        Self {
            sample_sizes,
            replications,
            base_seed: base_seed.into(),
        }
    }

    /// Sample sizes 10 through 100,000, 200 replications, base seed 345.
    pub fn standard() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZES.to_vec(), DEFAULT_REPLICATIONS, DEFAULT_SEED)
    }

    /// Sample sizes of the study.
    pub fn sample_sizes(&self) -> &[i64] {
        &self.sample_sizes
    }

    /// Trials per sample size.
    pub fn replications(&self) -> usize {
        self.replications
    }

    /// First seed of the study.
    pub fn base_seed(&self) -> Seed {
        self.base_seed
    }

    /// Run every replication and summarise each sample size.
    ///
    /// # Errors
    /// Invalid argument if the ladder is empty, any sample size is below 1, or
    /// fewer than two replications are requested (a spread needs two points).
    pub fn run(&self) -> Result<Vec<DispersionPoint>, StudyError> {
        if self.sample_sizes.is_empty() {
            return Err(StudyError::invalid_argument(
                "dispersion study needs at least one sample size",
            ));
        }
        if self.replications < 2 {
            return Err(StudyError::invalid_argument(format!(
                "dispersion study needs at least 2 replications, got {}",
                self.replications
            )));
        }

        let batches = self
            .sample_sizes
            .iter()
            .enumerate()
            .map(|(size_index, &n)| self.requests(size_index, n))
            .collect::<Result<Vec<_>, _>>()?;

        let variance = Population::standard_die().variance();
        let points: Vec<DispersionPoint> = batches
            .iter()
            .map(|requests| {
                let means: Vec<f64> = requests
                    .par_iter()
                    .map(|request| request.run().sample_mean())
                    .collect();
                let stats: RunningStats = means.into_iter().collect();

                let sample_count = requests[0].sample_count();
                let point = DispersionPoint {
                    sample_count,
                    replications: requests.len(),
                    mean_of_means: stats.mean().unwrap_or(f64::NAN),
                    std_dev: stats.sample_std_dev().unwrap_or(f64::NAN),
                    theoretical_std_error: (variance / sample_count as f64).sqrt(),
                };
                tracing::debug!(
                    sample_count,
                    std_dev = point.std_dev,
                    theoretical = point.theoretical_std_error,
                    "dispersion level complete"
                );
                point
            })
            .collect();

        tracing::info!(
            base_seed = %self.base_seed,
            replications = self.replications,
            levels = points.len(),
            "dispersion study complete"
        );

        Ok(points)
    }

    fn requests(&self, size_index: usize, n: i64) -> Result<Vec<TrialRequest>, StudyError> {
        let first = (size_index * self.replications) as u64;
        (0..self.replications as u64)
            .map(|k| {
                TrialRequest::new(n, self.base_seed.offset(first + k)).map_err(StudyError::from)
            })
            .collect()
    }
}

impl Default for DispersionStudy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_parameters() {
        let study = DispersionStudy::standard();
        assert_eq!(study.sample_sizes(), &DEFAULT_SAMPLE_SIZES);
        assert_eq!(study.replications(), DEFAULT_REPLICATIONS);
        assert_eq!(study.base_seed(), Seed::new(DEFAULT_SEED));
    }

    #[test]
    fn test_theoretical_std_error() {
        let points = DispersionStudy::new(vec![100], 10, 0).run().unwrap();
        assert_relative_eq!(
            points[0].theoretical_std_error,
            (35.0_f64 / 12.0 / 100.0).sqrt(),
            epsilon = 1e-12
        );
        assert_eq!(points[0].replications, 10);
    }

    #[test]
    fn test_deterministic_despite_parallelism() {
        let study = DispersionStudy::new(vec![10, 100], 64, 9);
        assert_eq!(study.run().unwrap(), study.run().unwrap());
    }

    #[test]
    fn test_seeds_do_not_repeat_across_sizes() {
        let study = DispersionStudy::new(vec![10, 10], 4, 0);
        let first = study.requests(0, 10).unwrap();
        let second = study.requests(1, 10).unwrap();
        for a in &first {
            assert!(second.iter().all(|b| a.seed() != b.seed()));
        }

        let seeds: Vec<i64> = second.iter().map(|r| r.seed().value()).collect();
        assert_eq!(seeds, vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_too_few_replications() {
        for replications in [0, 1] {
            let err = DispersionStudy::new(vec![10], replications, 0)
                .run()
                .unwrap_err();
            assert!(err.is_invalid_argument());
            assert!(err.to_string().contains("replications"));
        }
    }

    #[test]
    fn test_invalid_sample_size() {
        let err = DispersionStudy::new(vec![-5], 10, 0).run().unwrap_err();
        assert!(matches!(err, StudyError::Trial(_)));
    }

    #[test]
    fn test_empty_ladder() {
        let err = DispersionStudy::new(Vec::<i64>::new(), 10, 0)
            .run()
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
