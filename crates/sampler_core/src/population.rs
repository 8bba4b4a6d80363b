//! The fixed population sampled by every trial.
//!
//! A fair six-sided die: six labelled outcomes with values 1 through 6, each
//! with true probability 1/6. The population is a constant for the lifetime of
//! the process.

use rand_distr::Uniform;

/// Number of faces on the die.
pub const FACE_COUNT: usize = 6;

/// Theoretical long-run average of a fair die roll.
pub const EXPECTED_VALUE: f64 = 3.5;

/// A single labelled outcome of the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Face value (1-6)
    pub value: u8,
    /// Display label
    pub label: &'static str,
}

static STANDARD_DIE: [Outcome; FACE_COUNT] = [
    Outcome { value: 1, label: "1" },
    Outcome { value: 2, label: "2" },
    Outcome { value: 3, label: "3" },
    Outcome { value: 4, label: "4" },
    Outcome { value: 5, label: "5" },
    Outcome { value: 6, label: "6" },
];

/// Ordered set of equally likely outcomes.
///
/// # Examples
/// ```
/// use sampler_core::Population;
///
/// let die = Population::standard_die();
/// assert_eq!(die.len(), 6);
/// assert_eq!(die.expected_value(), 3.5);
/// assert!(die.contains(6));
/// assert!(!die.contains(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Population {
    outcomes: &'static [Outcome; FACE_COUNT],
}

impl Population {
    /// The fair six-sided die.
    pub fn standard_die() -> Self {
        Self {
            outcomes: &STANDARD_DIE,
        }
    }

    /// Outcomes in ascending value order.
    #[inline]
    pub fn outcomes(&self) -> &'static [Outcome; FACE_COUNT] {
        self.outcomes
    }

    /// Face values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.outcomes.iter().map(|o| o.value)
    }

    /// Number of outcomes.
    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Always false; the die has six faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Returns true if `value` is one of the faces.
    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        (self.min_value()..=self.max_value()).contains(&value)
    }

    /// Outcome for a face value, if it exists.
    pub fn outcome(&self, value: u8) -> Option<&'static Outcome> {
        self.index_of(value).map(|i| &self.outcomes[i])
    }

    /// Slot index (0-based) of a face value in tally arrays.
    #[inline]
    pub fn index_of(&self, value: u8) -> Option<usize> {
        if self.contains(value) {
            Some(usize::from(value - self.min_value()))
        } else {
            None
        }
    }

    /// Smallest face value.
    #[inline]
    pub fn min_value(&self) -> u8 {
        self.outcomes[0].value
    }

    /// Largest face value.
    #[inline]
    pub fn max_value(&self) -> u8 {
        self.outcomes[FACE_COUNT - 1].value
    }

    /// True probability of each outcome (1/6).
    #[inline]
    pub fn true_probability(&self) -> f64 {
        1.0 / self.len() as f64
    }

    /// Theoretical mean, Σ value / 6 = 3.5.
    pub fn expected_value(&self) -> f64 {
        self.values().map(f64::from).sum::<f64>() / self.len() as f64
    }

    /// Theoretical variance of a single roll, 35/12.
    pub fn variance(&self) -> f64 {
        let mu = self.expected_value();
        self.values()
            .map(|v| (f64::from(v) - mu).powi(2))
            .sum::<f64>()
            / self.len() as f64
    }

    /// Distribution drawing face values uniformly, with replacement.
    pub(crate) fn face_distribution(&self) -> Uniform<u8> {
        Uniform::new_inclusive(self.min_value(), self.max_value())
    }
}

impl Default for Population {
    fn default() -> Self {
        Self::standard_die()
    }
}
