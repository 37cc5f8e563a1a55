#![cfg(test)]

use super::error::RunError;
use super::generator::{gaussian_matrix, seeded_rng};
use super::grid::Shape2D;

#[test]
fn same_seed_reproduces_matrix_bit_for_bit() {
    let first = gaussian_matrix(&mut seeded_rng(42), 16, 1.0, 1.0).unwrap();
    let second = gaussian_matrix(&mut seeded_rng(42), 16, 1.0, 1.0).unwrap();
    assert_eq!(first.shape(), Shape2D::square(16));
    assert!(
        first
            .as_slice()
            .iter()
            .zip(second.as_slice())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    );
}

#[test]
fn different_seeds_differ() {
    let first = gaussian_matrix(&mut seeded_rng(42), 4, 1.0, 1.0).unwrap();
    let second = gaussian_matrix(&mut seeded_rng(43), 4, 1.0, 1.0).unwrap();
    assert_ne!(first, second);
}

#[test]
fn successive_draws_continue_the_stream() {
    let mut rng = seeded_rng(7);
    let first = gaussian_matrix(&mut rng, 6, 1.0, 1.0).unwrap();
    let second = gaussian_matrix(&mut rng, 6, 1.0, 1.0).unwrap();
    assert_ne!(first, second);
}

#[test]
fn sample_moments_follow_parameters() {
    let field = gaussian_matrix(&mut seeded_rng(42), 200, 1.0, 1.0).unwrap();
    let n = field.len() as f64;
    let mean = field.sum() / n;
    let var = field
        .as_slice()
        .iter()
        .map(|v| (v - mean) * (v - mean))
        .sum::<f64>()
        / n;
    assert!((mean - 1.0).abs() < 0.02, "mean={mean}");
    assert!((var - 1.0).abs() < 0.03, "var={var}");
}

#[test]
fn zero_std_gives_constant_matrix() {
    let field = gaussian_matrix(&mut seeded_rng(1), 3, 2.5, 0.0).unwrap();
    assert!(field.as_slice().iter().all(|value| *value == 2.5));
}

#[test]
fn zero_dimension_is_invalid() {
    let err = gaussian_matrix(&mut seeded_rng(42), 0, 1.0, 1.0).unwrap_err();
    assert!(matches!(err, RunError::InvalidArgument(_)));
}

#[test]
fn negative_std_is_invalid() {
    let err = gaussian_matrix(&mut seeded_rng(42), 4, 1.0, -1.0).unwrap_err();
    assert!(matches!(err, RunError::InvalidArgument(_)));
}
