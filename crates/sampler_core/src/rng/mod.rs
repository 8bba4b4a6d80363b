//! # Random Number Generation
//!
//! Seeded generator used by every trial.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: a `(sample_count, seed)` pair always yields the same
//!   frequency table, on every platform and every release of the crate
//! - **Isolation**: one generator per trial; no thread-local or global state
//! - **Static dispatch**: the generator is a concrete type, never `dyn RngCore`
//!
//! ## Algorithm Choice
//!
//! `rand::rngs::StdRng` is explicitly not value-stable between `rand`
//! releases, so it cannot back a regression fixture. [`TrialRng`] pins
//! ChaCha8 (`rand_chacha::ChaCha8Rng`), seeded through
//! `SeedableRng::seed_from_u64` (PCG32 key expansion), and maps draws to faces
//! with `Uniform<u8>` over `1..=6`.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::TrialRng;
//! use sampler_core::Population;
//!
//! let die = Population::standard_die();
//! let mut rng = TrialRng::from_seed(345);
//!
//! let counts = rng.tally(&die, 60);
//! assert_eq!(counts.iter().sum::<u64>(), 60);
//! ```

mod prng;

pub use prng::TrialRng;
