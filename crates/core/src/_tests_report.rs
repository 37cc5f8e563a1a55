#![cfg(test)]

use std::time::Duration;

use num_complex::Complex64;

use super::analysis::ErrorStats;
use super::report::{Reporter, format_errors, sci, sci_complex, seconds};

#[test]
fn sci_uses_signed_two_digit_exponent() {
    assert_eq!(sci(1.0), "1.000000e+00");
    assert_eq!(sci(-0.00123456789), "-1.234568e-03");
    assert_eq!(sci(499_123.4), "4.991234e+05");
    assert_eq!(sci(f64::EPSILON), "2.220446e-16");
    assert_eq!(sci(1.5e300), "1.500000e+300");
    assert_eq!(sci(0.0), "0.000000e+00");
}

#[test]
fn sci_spells_non_finite_values() {
    assert_eq!(sci(f64::NAN), "nan");
    assert_eq!(sci(f64::INFINITY), "inf");
    assert_eq!(sci(f64::NEG_INFINITY), "-inf");
}

#[test]
fn sci_complex_signs_the_imaginary_part() {
    assert_eq!(
        sci_complex(Complex64::new(2.5, 0.0)),
        "2.500000e+00+0.000000e+00j"
    );
    assert_eq!(
        sci_complex(Complex64::new(-1.0, -0.5)),
        "-1.000000e+00-5.000000e-01j"
    );
}

#[test]
fn seconds_prints_six_decimals() {
    assert_eq!(seconds(Duration::from_micros(1_500_250)), "1.500250");
    assert_eq!(seconds(Duration::ZERO), "0.000000");
}

#[test]
fn error_block_lists_all_statistics() {
    let stats = ErrorStats {
        mean_abs: 1e-16,
        median_abs: 2e-17,
        mean_rel: 3e-16,
        median_rel: 4e-17,
        count: 36,
    };
    assert_eq!(
        format_errors(&stats),
        "Mean absolute error: 1.000000e-16\n\
         Median absolute error: 2.000000e-17\n\
         Mean relative error: 3.000000e-16 (calculated over 36 non-zero values)\n\
         Median relative error: 4.000000e-17\n"
    );
}

#[test]
fn reporter_writes_identical_lines_to_both_sinks() {
    let mut reporter = Reporter::new(Vec::<u8>::new(), Vec::<u8>::new());
    reporter.line("\n1) first").unwrap();
    reporter.line(String::from("second")).unwrap();
    let (console, file) = reporter.finish().unwrap();
    assert_eq!(console, file);
    assert_eq!(String::from_utf8(file).unwrap(), "\n1) first\nsecond\n");
}

#[test]
fn reporter_create_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.txt");
    std::fs::write(&path, "stale content that must disappear\n").unwrap();

    let mut reporter = Reporter::create(&path).unwrap();
    reporter.line("fresh").unwrap();
    reporter.finish().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
}

#[test]
fn reporter_create_fails_for_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("results.txt");
    assert!(Reporter::create(&path).is_err());
}
