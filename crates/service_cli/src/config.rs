//! Report configuration management
//!
//! Handles loading configuration from TOML files, environment variables and
//! CLI arguments.

use sampler_core::Seed;
use sampler_study::dispersion::DEFAULT_REPLICATIONS;
use sampler_study::{DEFAULT_SAMPLE_SIZES, DEFAULT_SEED};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Largest sample size accepted for a single trial.
pub const MAX_SAMPLE_SIZE: i64 = 10_000_000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: text, json")]
    InvalidFormat(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels supported by the report driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Report configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Seed of the convergence study and base seed of the dispersion study
    pub seed: Seed,
    /// Sample sizes, in report order
    pub sample_sizes: Vec<i64>,
    /// Seeds per sample size in the dispersion study
    pub replications: usize,
    /// Whether to run the dispersion study
    pub dispersion: bool,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            seed: Seed::new(DEFAULT_SEED),
            sample_sizes: DEFAULT_SAMPLE_SIZES.to_vec(),
            replications: DEFAULT_REPLICATIONS,
            dispersion: true,
            format: OutputFormat::Text,
            output: None,
            log_level: LogLevel::Info,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `DICE_REPORT_*` overrides from an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup("DICE_REPORT_SEED") {
            self.seed = parse_seed("DICE_REPORT_SEED", &seed)?;
        }

        if let Some(sizes) = lookup("DICE_REPORT_SAMPLE_SIZES") {
            self.sample_sizes = parse_sample_sizes("DICE_REPORT_SAMPLE_SIZES", &sizes)?;
        }

        if let Some(replications) = lookup("DICE_REPORT_REPLICATIONS") {
            self.replications = replications.trim().parse().map_err(|_| {
                ConfigError::InvalidValue {
                    key: "DICE_REPORT_REPLICATIONS".to_string(),
                    message: format!("'{}' is not a non-negative integer", replications),
                }
            })?;
        }

        if let Some(format) = lookup("DICE_REPORT_FORMAT") {
            self.format = OutputFormat::from_str(&format)?;
        }

        if let Some(log_level) = lookup("DICE_REPORT_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = &cli.seed {
            self.seed = parse_seed("--seed", seed)?;
        }
        if let Some(sizes) = &cli.sample_sizes {
            self.sample_sizes = sizes.clone();
        }
        if let Some(replications) = cli.replications {
            self.replications = replications;
        }
        if cli.skip_dispersion {
            self.dispersion = false;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if let Some(output) = &cli.output {
            self.output = Some(output.clone());
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }

    /// Validate the configuration, collecting every violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.sample_sizes.is_empty() {
            errors.push("sample_sizes cannot be empty".to_string());
        }

        errors.extend(
            self.sample_sizes
                .iter()
                .filter_map(|&n| sample_size_violation(n)),
        );

        if self.dispersion && self.replications < 2 {
            errors.push(format!(
                "replications must be at least 2 for the dispersion study, got {}",
                self.replications
            ));
        }

        if let Some(output) = &self.output {
            if output.as_os_str().is_empty() {
                errors.push("output path cannot be empty".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Check a single trial's sample count against the same bounds as the ladder.
pub fn check_sample_count(sample_count: i64) -> Result<(), ConfigError> {
    match sample_size_violation(sample_count) {
        Some(message) => Err(ConfigError::InvalidValue {
            key: "sample_count".to_string(),
            message,
        }),
        None => Ok(()),
    }
}

fn sample_size_violation(n: i64) -> Option<String> {
    if n < 1 {
        Some(format!("sample size must be at least 1, got {}", n))
    } else if n > MAX_SAMPLE_SIZE {
        Some(format!(
            "sample size {} exceeds maximum allowed ({})",
            n, MAX_SAMPLE_SIZE
        ))
    } else {
        None
    }
}

fn parse_seed(key: &str, raw: &str) -> Result<Seed, ConfigError> {
    Seed::from_str(raw).map_err(|e| ConfigError::InvalidValue {
        key: key.to_string(),
        message: e.to_string(),
    })
}

fn parse_sample_sizes(key: &str, raw: &str) -> Result<Vec<i64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("'{}' is not an integer", s),
            })
        })
        .collect()
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override (validated as a finite integer)
    pub seed: Option<String>,
    /// Sample size override
    pub sample_sizes: Option<Vec<i64>>,
    /// Replications override
    pub replications: Option<usize>,
    /// Disable the dispersion study
    pub skip_dispersion: bool,
    /// Output format override
    pub format: Option<String>,
    /// Output file override
    pub output: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ReportConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<ReportConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };

    config.apply_env_from(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
