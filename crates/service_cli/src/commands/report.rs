//! Report command implementation
//!
//! Runs the convergence and dispersion studies over the configured ladder.

use service_cli::config::ReportConfig;
use service_cli::error::ReportError;
use service_cli::report::Report;
use tracing::info;

/// Run the report command
pub fn run(config: &ReportConfig) -> Result<(), ReportError> {
    info!(
        seed = %config.seed,
        sample_sizes = ?config.sample_sizes,
        replications = config.replications,
        dispersion = config.dispersion,
        format = %config.format,
        "Generating report..."
    );

    let report = Report::build(config)?;
    super::emit(config, &report.render(config.format)?)?;

    info!("Report generation complete");
    Ok(())
}
