//! # Dice Report
//!
//! Report driver for the law of large numbers demonstration: runs the
//! convergence and dispersion studies over the configured sample sizes and
//! renders the results as text tables or JSON.
//!
//! Charts are left to external tools; the JSON output carries everything a
//! chart needs (counts, probabilities and sample means per sample size).

pub mod config;
pub mod error;
pub mod report;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{build_config, CliArgs, LogLevel, OutputFormat, ReportConfig};
    pub use crate::error::ReportError;
    pub use crate::report::Report;
}
