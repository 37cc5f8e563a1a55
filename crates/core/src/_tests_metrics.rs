#![cfg(test)]

use super::analysis::ErrorStats;
use super::metrics::{MetricsConfig, MetricsEvent, TransformStage};

#[test]
fn disabled_config_builds_no_recorder() {
    let recorder = MetricsConfig::default().build_recorder().unwrap();
    assert!(recorder.is_none());
}

#[test]
fn enabled_config_without_output_is_an_error() {
    let config = MetricsConfig {
        enabled: true,
        output: None,
        ..MetricsConfig::default()
    };
    assert!(config.build_recorder().is_err());
}

#[test]
fn recorder_writes_one_json_object_per_event() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("metrics.jsonl");
    let config = MetricsConfig {
        enabled: true,
        output: Some(path.clone()),
        ..MetricsConfig::default()
    };
    let recorder = config.build_recorder().unwrap().expect("recorder");
    recorder.emit(MetricsEvent::Transform {
        label: "C",
        stage: TransformStage::ForwardC2c,
        rows: 4,
        cols: 4,
        duration_ms: 0.5,
    });
    recorder.emit(MetricsEvent::Reconstruction {
        label: "zero",
        stats: ErrorStats {
            mean_abs: 1.0,
            median_abs: 1.0,
            mean_rel: f64::NAN,
            median_rel: f64::NAN,
            count: 0,
        },
    });
    drop(recorder);

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["event"], "transform");
    assert_eq!(lines[0]["stage"], "forward_c2c");
    assert_eq!(lines[0]["rows"], 4);
    assert!(lines[0]["timestamp_ms"].as_f64().unwrap() > 0.0);
    assert_eq!(lines[1]["event"], "reconstruction");
    assert_eq!(lines[1]["count"], 0);
    assert!(lines[1]["mean_rel"].is_null());
}
