//! # Sampler Core
//!
//! Seeded resampling and frequency aggregation for a fair six-sided die.
//!
//! This crate provides:
//! - The fixed [`Population`] of die faces (values 1 through 6)
//! - A value-stable seeded generator ([`TrialRng`])
//! - [`run_trial`]: draw `N` faces with replacement, tally them and derive
//!   empirical probabilities and the sample mean
//!
//! ## Purity
//!
//! Every trial owns its generator. There is no global random state, no I/O and
//! nothing is shared between calls, so independent trials may run on any
//! thread.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::run_trial;
//!
//! let table = run_trial(1_000, 345).unwrap();
//! assert_eq!(table.counts().values().sum::<u64>(), 1_000);
//! assert!(table.sample_mean() >= 1.0 && table.sample_mean() <= 6.0);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod frequency;
pub mod population;
pub mod rng;
pub mod trial;

pub use error::TrialError;
pub use frequency::{FaceFrequency, FrequencyTable};
pub use population::{Outcome, Population, EXPECTED_VALUE, FACE_COUNT};
pub use rng::TrialRng;
pub use trial::{run_trial, Seed, TrialRequest};
