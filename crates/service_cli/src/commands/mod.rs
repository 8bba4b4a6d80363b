//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod report;
pub mod trial;

use service_cli::config::ReportConfig;
use service_cli::error::ReportError;
use tracing::info;

/// Write rendered output to the configured file, or stdout.
fn emit(config: &ReportConfig, rendered: &str) -> Result<(), ReportError> {
    match &config.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!(path = %path.display(), "Report written");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
