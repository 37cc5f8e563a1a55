#![cfg(test)]

use num_complex::Complex64;

use super::field::{Field2D, RealField, SpectralField};
use super::grid::Shape2D;

#[test]
fn zeros_initializes_all_entries_to_zero() {
    let shape = Shape2D::new(2, 3);
    let field = SpectralField::zeros(shape);
    assert_eq!(field.len(), shape.len());
    assert!(field.as_slice().iter().all(|value| *value == Complex64::ZERO));
}

#[test]
#[should_panic(expected = "data length must match shape")]
fn from_vec_rejects_mismatched_lengths() {
    let shape = Shape2D::new(2, 2);
    let _ = RealField::from_vec(shape, vec![0.0; shape.len() - 1]);
}

#[test]
fn idx_is_row_major() {
    let shape = Shape2D::new(2, 3);
    assert_eq!(shape.idx(0, 0), 0);
    assert_eq!(shape.idx(0, 2), 2);
    assert_eq!(shape.idx(1, 0), 3);
    assert_eq!(shape.idx(1, 2), 5);
}

#[test]
fn from_fn_visits_cells_in_row_major_order() {
    let shape = Shape2D::new(3, 2);
    let field = RealField::from_fn(shape, |row, col| (10 * row + col) as f64);
    assert_eq!(field.as_slice(), &[0.0, 1.0, 10.0, 11.0, 20.0, 21.0]);
    assert_eq!(field.get(2, 1), 21.0);
    assert_eq!(field.row(1), &[10.0, 11.0]);
}

#[test]
fn get_mut_writes_the_addressed_cell() {
    let mut field = RealField::zeros(Shape2D::new(2, 2));
    *field.get_mut(1, 0) = 4.0;
    assert_eq!(field.as_slice(), &[0.0, 0.0, 4.0, 0.0]);
}

#[test]
fn half_spectrum_shape_keeps_rows_and_halves_cols() {
    assert_eq!(Shape2D::square(1000).half_spectrum(), Shape2D::new(1000, 501));
    assert_eq!(Shape2D::square(6).half_spectrum(), Shape2D::new(6, 4));
    assert_eq!(Shape2D::square(5).half_spectrum(), Shape2D::new(5, 3));
}

#[test]
fn shape_displays_like_a_tuple() {
    assert_eq!(Shape2D::new(1000, 501).to_string(), "(1000, 501)");
}

#[test]
fn complex_conversions_round_trip_real_values() {
    let field = RealField::from_vec(Shape2D::new(1, 3), vec![1.5, -2.0, 0.0]);
    let complex = field.to_complex();
    assert!(complex.as_slice().iter().all(|value| value.im == 0.0));
    assert_eq!(complex.real_part(), field);
}

#[test]
fn norms_and_sum() {
    let field = SpectralField::from_vec(
        Shape2D::new(1, 2),
        vec![Complex64::new(3.0, 4.0), Complex64::new(0.0, -2.0)],
    );
    assert_eq!(field.norms().as_slice(), &[5.0, 2.0]);
    assert_eq!(field.norms().sum(), 7.0);
}

#[test]
fn field_into_vec_returns_original_storage() {
    let data = vec![1.0, 2.0, 3.0, 4.0];
    let field: Field2D<f64> = Field2D::from_vec(Shape2D::new(2, 2), data.clone());
    let recovered: Vec<f64> = field.into();
    assert_eq!(recovered, data);
}
