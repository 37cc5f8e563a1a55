#![cfg(test)]

use std::path::PathBuf;

use super::io::{ConfigError, RunConfig, DEFAULT_OUTPUT};

#[test]
fn empty_file_yields_standard_run() {
    let config = RunConfig::from_str("").unwrap();
    assert_eq!(config, RunConfig::default());
    assert_eq!(config.seed, 42);
    assert_eq!(config.size, 1000);
    assert_eq!(config.bonus_size, 6);
    assert_eq!(config.mean, 1.0);
    assert_eq!(config.std, 1.0);
    assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    assert!(config.dump_dir.is_none());
    assert!(!config.metrics.enabled);
}

#[test]
fn full_file_is_parsed() {
    let content = r#"
seed = 7
size = 64
bonus_size = 8
mean = 0.0
std = 2.0
output = "out/results.txt"
dump_dir = "dumps"

[metrics]
enabled = true
output = "metrics.jsonl"
"#;
    let config = RunConfig::from_str(content).expect("should parse");
    assert_eq!(config.seed, 7);
    assert_eq!(config.size, 64);
    assert_eq!(config.bonus_size, 8);
    assert_eq!(config.std, 2.0);
    assert_eq!(config.output, PathBuf::from("out/results.txt"));
    assert_eq!(config.dump_dir, Some(PathBuf::from("dumps")));
    assert!(config.metrics.enabled);
    assert_eq!(config.metrics.output, Some(PathBuf::from("metrics.jsonl")));
}

#[test]
fn zero_size_is_rejected() {
    let result = RunConfig::from_str("size = 0");
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn negative_std_is_rejected() {
    let result = RunConfig::from_str("std = -1.0");
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn enabled_metrics_require_output() {
    let result = RunConfig::from_str("[metrics]\nenabled = true\n");
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn unknown_keys_are_a_parse_error() {
    let result = RunConfig::from_str("sizee = 10");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn from_path_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = RunConfig::from_path(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = RunConfig::default();
    config.size = 32;
    config.dump_dir = Some(PathBuf::from("dumps"));
    let text = toml::to_string(&config).unwrap();
    assert_eq!(RunConfig::from_str(&text).unwrap(), config);
}
