//! Report assembly and rendering.

use crate::config::{OutputFormat, ReportConfig};
use crate::error::ReportError;
use sampler_core::{FrequencyTable, Population, Seed};
use sampler_study::{ConvergencePoint, ConvergenceStudy, DispersionPoint, DispersionStudy};
use serde::Serialize;
use std::fmt::Write;

/// Everything one run of the report computes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Seed of the convergence study, base seed of the dispersion study
    pub seed: Seed,
    /// Theoretical mean of a roll (3.5)
    pub expected_value: f64,
    /// Theoretical probability of each face (1/6)
    pub true_probability: f64,
    /// One frequency table per sample size
    pub convergence: Vec<ConvergencePoint>,
    /// Spread of sample means per sample size, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispersion: Option<Vec<DispersionPoint>>,
}

impl Report {
    /// Run the studies described by `config`.
    pub fn build(config: &ReportConfig) -> Result<Self, ReportError> {
        let population = Population::standard_die();

        let convergence = ConvergenceStudy::new(config.sample_sizes.clone(), config.seed).run()?;

        let dispersion = if config.dispersion {
            let study =
                DispersionStudy::new(config.sample_sizes.clone(), config.replications, config.seed);
            Some(study.run()?)
        } else {
            None
        };

        Ok(Self {
            seed: config.seed,
            expected_value: population.expected_value(),
            true_probability: population.true_probability(),
            convergence,
            dispersion,
        })
    }

    /// Render in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String, ReportError> {
        match format {
            OutputFormat::Text => Ok(self.render_text()?),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_text(&self) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        writeln!(out, "Law of large numbers: fair six-sided die")?;
        writeln!(
            out,
            "Expected value {:.4}, true probability {:.4} per face, seed {}",
            self.expected_value, self.true_probability, self.seed
        )?;

        for point in &self.convergence {
            writeln!(out)?;
            write_table(&mut out, &point.table)?;
        }

        if let Some(dispersion) = &self.dispersion {
            let replications = dispersion.first().map_or(0, |p| p.replications);
            writeln!(out)?;
            writeln!(
                out,
                "Dispersion of sample means ({} seeds per sample size)",
                replications
            )?;
            writeln!(
                out,
                "  {:>8}  {:>13}  {:>9}  {:>11}  {:>6}",
                "N", "mean of means", "std dev", "theoretical", "ratio"
            )?;
            for point in dispersion {
                writeln!(
                    out,
                    "  {:>8}  {:>13.4}  {:>9.5}  {:>11.5}  {:>6.3}",
                    point.sample_count,
                    point.mean_of_means,
                    point.std_dev,
                    point.theoretical_std_error,
                    point.std_error_ratio()
                )?;
            }
        }

        Ok(out)
    }
}

/// Render a single frequency table.
pub fn render_table(table: &FrequencyTable, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            write_table(&mut out, table)?;
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)?),
    }
}

/// Append the text form of `table`: one row per face, then the sample mean.
pub fn write_table(out: &mut String, table: &FrequencyTable) -> std::fmt::Result {
    let p = table.population().true_probability();

    writeln!(out, "N = {}", table.sample_count())?;
    writeln!(
        out,
        "  {:>4}  {:>8}  {:>11}  {:>9}",
        "face", "count", "probability", "deviation"
    )?;
    for row in table.rows() {
        writeln!(
            out,
            "  {:>4}  {:>8}  {:>11.4}  {:>+9.4}",
            row.label,
            row.count,
            row.probability,
            row.probability - p
        )?;
    }
    writeln!(
        out,
        "  sample mean {:.4} (deviation {:+.4})",
        table.sample_mean(),
        table.mean_deviation()
    )
}
