//! Seeded generator wrapper for die-roll trials.

use crate::population::{Population, FACE_COUNT};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Uniform};

/// Trial random number generator.
///
/// Draws die faces uniformly with replacement. Each draw is independent of
/// every earlier draw in the same trial.
///
/// # Examples
///
/// ```rust
/// use sampler_core::rng::TrialRng;
/// use sampler_core::Population;
///
/// let die = Population::standard_die();
/// let mut rng1 = TrialRng::from_seed(12345);
/// let mut rng2 = TrialRng::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.tally(&die, 100), rng2.tally(&die, 100));
/// ```
#[derive(Debug, Clone)]
pub struct TrialRng {
    /// The underlying PRNG instance.
    inner: ChaCha8Rng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl TrialRng {
    /// Creates a new generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a single face value from `population`.
    #[cfg(test)]
    pub(crate) fn roll(&mut self, population: &Population) -> u8 {
        population.face_distribution().sample(&mut self.inner)
    }

    /// Fills `buffer` with face values drawn from `population`, in draw order.
    #[cfg(test)]
    pub(crate) fn fill_rolls(&mut self, population: &Population, buffer: &mut [u8]) {
        let faces = population.face_distribution();
        for value in buffer.iter_mut() {
            *value = faces.sample(&mut self.inner);
        }
    }

    /// Draws `draws` faces and counts occurrences per face.
    ///
    /// Slot `i` of the result holds the count for the `i`-th outcome of
    /// `population` in ascending value order. Every slot starts at zero, so
    /// faces that never come up are still present.
    pub fn tally(&mut self, population: &Population, draws: u64) -> [u64; FACE_COUNT] {
        let faces: Uniform<u8> = population.face_distribution();
        let low = population.min_value();
        let mut counts = [0u64; FACE_COUNT];
        for _ in 0..draws {
            let face = faces.sample(&mut self.inner);
            counts[usize::from(face - low)] += 1;
        }
        counts
    }
}
