//! Trial command implementation
//!
//! Runs a single trial and prints its frequency table.

use sampler_core::TrialRequest;
use service_cli::config::{check_sample_count, ReportConfig};
use service_cli::error::ReportError;
use service_cli::report::render_table;
use tracing::info;

/// Run the trial command
pub fn run(config: &ReportConfig, sample_count: i64) -> Result<(), ReportError> {
    check_sample_count(sample_count)?;
    let request = TrialRequest::new(sample_count, config.seed)?;
    info!(sample_count, seed = %config.seed, "Running trial...");

    let table = request.run();
    super::emit(config, &render_table(&table, config.format)?)
}
