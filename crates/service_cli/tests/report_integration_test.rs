//! Report Integration Tests
//!
//! Config file -> studies -> rendered output, end to end.

use sampler_core::Seed;
use service_cli::config::build_config_with_env;
use service_cli::prelude::*;
use std::io::Write;

fn no_env(_: &str) -> Option<String> {
    None
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_json_report_from_config_file() {
    let file = write_config(
        r#"
        seed = 345
        sample_sizes = [10, 100]
        replications = 25
        format = "json"
    "#,
    );
    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    let config = build_config_with_env(&cli, no_env).unwrap();
    assert_eq!(config.format, OutputFormat::Json);

    let report = Report::build(&config).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&report.render(config.format).unwrap()).unwrap();

    assert_eq!(json["seed"], 345);
    assert_eq!(json["expected_value"], 3.5);

    let first = &json["convergence"][0];
    assert_eq!(first["sample_count"], 10);
    let counts: Vec<u64> = (1..=6)
        .map(|face| first["table"]["counts"][face.to_string()].as_u64().unwrap())
        .collect();
    assert_eq!(counts, vec![1, 2, 1, 2, 2, 2]);
    assert!((first["table"]["sample_mean"].as_f64().unwrap() - 3.8).abs() < 1e-12);

    let dispersion = json["dispersion"].as_array().unwrap();
    assert_eq!(dispersion.len(), 2);
    assert_eq!(dispersion[0]["replications"], 25);
}

#[test]
fn test_float_seed_in_config_file() {
    let file = write_config("seed = 345.0\ndispersion = false\n");
    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let config = build_config_with_env(&cli, no_env).unwrap();
    assert_eq!(config.seed, Seed::new(345));
}

#[test]
fn test_non_integer_seed_in_config_file_is_rejected() {
    let file = write_config("seed = 345.5\n");
    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let err = build_config_with_env(&cli, no_env).unwrap_err();
    assert!(err.to_string().contains("seed"), "unexpected error: {}", err);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let cli = CliArgs {
        config_file: Some(dir.path().join("absent.toml")),
        ..Default::default()
    };
    assert!(build_config_with_env(&cli, no_env).is_err());
}

#[test]
fn test_env_then_cli_precedence() {
    let file = write_config("seed = 1\nreplications = 10\n");
    let cli = CliArgs {
        config_file: Some(file.path().to_path_buf()),
        replications: Some(30),
        ..Default::default()
    };
    let env = |key: &str| match key {
        "DICE_REPORT_SEED" => Some("2".to_string()),
        "DICE_REPORT_REPLICATIONS" => Some("20".to_string()),
        _ => None,
    };

    let config = build_config_with_env(&cli, env).unwrap();
    assert_eq!(config.seed, Seed::new(2));
    assert_eq!(config.replications, 30);
}

#[test]
fn test_text_report_matches_standard_ladder() {
    let config = ReportConfig {
        replications: 20,
        ..Default::default()
    };
    let text = Report::build(&config)
        .unwrap()
        .render(OutputFormat::Text)
        .unwrap();

    for n in [10, 100, 1_000, 10_000, 100_000] {
        assert!(text.contains(&format!("N = {}\n", n)), "missing table for N={}", n);
    }
}
