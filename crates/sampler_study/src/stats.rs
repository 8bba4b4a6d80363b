//! Running summary statistics.
//!
//! # Algorithm
//! Welford's online algorithm keeps a running mean and sum of squared
//! deviations, avoiding the cancellation of `E[X²] − (E[X])²`.
//!
//! Reference: Welford (1962), "Note on a Method for Calculating Corrected
//! Sums of Squares and Products", *Technometrics* 4(3).

/// Welford accumulator over a stream of `f64` values.
///
/// # Examples
/// ```
/// use sampler_study::RunningStats;
///
/// let stats: RunningStats = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
/// assert_eq!(stats.count(), 8);
/// assert!((stats.mean().unwrap() - 5.0).abs() < 1e-12);
/// assert!((stats.sample_variance().unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningStats {
    count: u64,
    mean: f64,
    m2: f64,
}

impl RunningStats {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one observation.
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Number of observations.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Mean; `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Bessel-corrected variance; `None` with fewer than two observations.
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count > 1).then(|| self.m2 / (self.count - 1) as f64)
    }

    /// Bessel-corrected standard deviation; `None` with fewer than two observations.
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        for x in iter {
            stats.push(x);
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty() {
        let stats = RunningStats::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.mean(), None);
        assert_eq!(stats.sample_variance(), None);
    }

    #[test]
    fn test_single_value() {
        let stats: RunningStats = std::iter::once(3.0).collect();
        assert_eq!(stats.mean(), Some(3.0));
        assert_eq!(stats.sample_std_dev(), None);
    }

    #[test]
    fn test_constant_values_have_zero_spread() {
        let stats: RunningStats = std::iter::repeat(3.5).take(100).collect();
        assert_relative_eq!(stats.mean().unwrap(), 3.5);
        assert_relative_eq!(stats.sample_variance().unwrap(), 0.0);
    }

    #[test]
    fn test_large_offset_is_stable() {
        // Naive E[X²] − E[X]² loses every digit here.
        let stats: RunningStats = [1e9 + 4.0, 1e9 + 7.0, 1e9 + 13.0, 1e9 + 16.0]
            .into_iter()
            .collect();
        assert_relative_eq!(stats.sample_variance().unwrap(), 30.0, epsilon = 1e-6);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Welford agrees with the two-pass formula.
        #[test]
        fn matches_two_pass(data in proptest::collection::vec(1.0_f64..6.0, 2..500)) {
            let stats: RunningStats = data.iter().copied().collect();
            let n = data.len() as f64;
            let mean = data.iter().sum::<f64>() / n;
            let var = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);

            prop_assert!((stats.mean().unwrap() - mean).abs() < 1e-10);
            prop_assert!((stats.sample_variance().unwrap() - var).abs() < 1e-9);
        }
    }
}
