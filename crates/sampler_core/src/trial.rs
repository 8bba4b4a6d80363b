//! Trial requests and the [`run_trial`] entry point.
//!
//! A trial seeds a fresh [`TrialRng`], draws `sample_count` faces with
//! replacement, tallies them and freezes the tally into a
//! [`FrequencyTable`]. Arguments are validated before any draw; a failed
//! request never yields a partial table.

use crate::error::TrialError;
use crate::frequency::FrequencyTable;
use crate::population::Population;
use crate::rng::TrialRng;
use std::fmt;
use std::str::FromStr;

/// Smallest `f64` outside the `i64` range (2^63).
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Seed of a trial.
///
/// Any `i64` is valid. Negative seeds map to the generator seed by
/// two's-complement reinterpretation, so `-1` and `u64::MAX` select the same
/// stream.
///
/// Floating-point and text input must hold a finite integral value:
///
/// ```
/// use sampler_core::Seed;
///
/// assert_eq!(Seed::try_from(345.0).unwrap(), Seed::new(345));
/// assert!(Seed::try_from(f64::NAN).is_err());
/// assert!(Seed::try_from(3.5).is_err());
/// assert!("inf".parse::<Seed>().is_err());
/// assert_eq!("-7".parse::<Seed>().unwrap().value(), -7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SeedRepr", into = "i64"))]
pub struct Seed(i64);

impl Seed {
    /// Wrap a seed value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The seed as given.
    #[inline]
    pub fn value(self) -> i64 {
        self.0
    }

    /// The seed handed to the generator.
    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0 as u64
    }

    /// Seed `offset` positions further along, wrapping on overflow.
    ///
    /// Used to derive independent seeds for replicated trials.
    #[inline]
    pub fn offset(self, offset: u64) -> Self {
        Self(self.0.wrapping_add(offset as i64))
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Self(i64::from(value))
    }
}

impl From<Seed> for i64 {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

impl TryFrom<f64> for Seed {
    type Error = TrialError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(TrialError::invalid_argument(format!(
                "seed must be a finite integer, got {}",
                value
            )));
        }
        if value.fract() != 0.0 {
            return Err(TrialError::invalid_argument(format!(
                "seed must be an integer, got {}",
                value
            )));
        }
        if !(-I64_BOUND..I64_BOUND).contains(&value) {
            return Err(TrialError::invalid_argument(format!(
                "seed {} is outside the 64-bit integer range",
                value
            )));
        }
        Ok(Self(value as i64))
    }
}

impl FromStr for Seed {
    type Err = TrialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return Ok(Self(value));
        }
        match s.parse::<f64>() {
            Ok(value) => Self::try_from(value),
            Err(_) => Err(TrialError::invalid_argument(format!(
                "seed must be an integer, got '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wire forms accepted for a seed in configuration files.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum SeedRepr {
    Int(i64),
    Float(f64),
    Text(String),
}

#[cfg(feature = "serde")]
impl TryFrom<SeedRepr> for Seed {
    type Error = TrialError;

    fn try_from(repr: SeedRepr) -> Result<Self, Self::Error> {
        match repr {
            SeedRepr::Int(value) => Ok(Self(value)),
            SeedRepr::Float(value) => Self::try_from(value),
            SeedRepr::Text(text) => text.parse(),
        }
    }
}

/// A validated trial: how many draws, and from which seed.
///
/// # Examples
/// ```
/// use sampler_core::TrialRequest;
///
/// let request = TrialRequest::new(10, 345).unwrap();
/// let table = request.run();
/// assert_eq!(table.sample_count(), 10);
///
/// assert!(TrialRequest::new(0, 345).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRequest {
    sample_count: u64,
    seed: Seed,
}

impl TrialRequest {
    /// Validate a request.
    ///
    /// # Errors
    /// [`TrialError::InvalidArgument`] if `sample_count < 1`.
    pub fn new(sample_count: i64, seed: impl Into<Seed>) -> Result<Self, TrialError> {
        if sample_count < 1 {
            return Err(TrialError::invalid_argument(format!(
                "sample_count must be at least 1, got {}",
                sample_count
            )));
        }
        Ok(Self {
            sample_count: sample_count as u64,
            seed: seed.into(),
        })
    }

    /// Number of draws.
    #[inline]
    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Seed of the trial.
    #[inline]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Draw, tally and aggregate.
    pub fn run(&self) -> FrequencyTable {
        let population = Population::standard_die();
        let mut rng = TrialRng::from_seed(self.seed.as_u64());
        let tally = rng.tally(&population, self.sample_count);
        FrequencyTable::from_tally(population, tally)
    }
}

/// Draw `sample_count` die faces with the generator seeded by `seed` and
/// aggregate them into a frequency table.
///
/// Identical arguments always produce identical tables.
///
/// # Errors
/// [`TrialError::InvalidArgument`] if `sample_count < 1`.
///
/// # Examples
/// ```
/// use sampler_core::run_trial;
///
/// let table = run_trial(10, 345).unwrap();
/// assert_eq!(table, run_trial(10, 345).unwrap());
/// assert!(run_trial(-5, 345).is_err());
/// ```
pub fn run_trial(sample_count: i64, seed: i64) -> Result<FrequencyTable, TrialError> {
    Ok(TrialRequest::new(sample_count, seed)?.run())
}
