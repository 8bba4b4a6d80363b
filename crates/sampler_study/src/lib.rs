//! # Sampler Study
//!
//! Repeats die-roll trials across a ladder of sample sizes to show the law of
//! large numbers at work.
//!
//! - [`ConvergenceStudy`]: one trial per sample size with a fixed seed; how far
//!   each table sits from the fair die
//! - [`DispersionStudy`]: many independently seeded trials per sample size; the
//!   spread of sample means against the theoretical standard error
//!   `sqrt(35/12 / N)`
//!
//! Replications run in parallel with `rayon`. Every replication owns its
//! generator and results are gathered in replication order, so a study is as
//! deterministic as a single trial.

#![warn(missing_docs)]

pub mod convergence;
pub mod dispersion;
pub mod error;
pub mod stats;

pub use convergence::{ConvergencePoint, ConvergenceStudy};
pub use dispersion::{DispersionPoint, DispersionStudy};
pub use error::StudyError;
pub use stats::RunningStats;

/// Sample sizes of the standard report.
pub const DEFAULT_SAMPLE_SIZES: [i64; 5] = [10, 100, 1_000, 10_000, 100_000];

/// Seed of the standard report.
pub const DEFAULT_SEED: i64 = 345;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::convergence::{ConvergencePoint, ConvergenceStudy};
    pub use crate::dispersion::{DispersionPoint, DispersionStudy};
    pub use crate::error::StudyError;
    pub use crate::{DEFAULT_SAMPLE_SIZES, DEFAULT_SEED};
}
