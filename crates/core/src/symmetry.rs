//! Full-spectrum reconstruction from a real-input half spectrum.

use crate::error::{RunError, RunResult};
use crate::field::SpectralField;
use crate::grid::Shape2D;

/// Expand a `rows x (cols / 2 + 1)` half spectrum to `rows x cols`.
///
/// Columns `0..=cols / 2` are copied. Each remaining column `j` takes the
/// conjugate of column `cols - j` from the same row:
///
/// ```text
/// full[i, j] = conj(full[i, cols - j])    for j in cols/2 + 1 .. cols
/// ```
///
/// The row index is not mirrored, so this is not the general Hermitian
/// identity `X[i, j] = conj(X[(rows - i) % rows, cols - j])`. The two agree on
/// rows that are their own mirror: row 0, and row `rows / 2` for even `rows`.
pub fn expand_half_spectrum(half: &SpectralField, cols: usize) -> RunResult<SpectralField> {
    let rows = half.shape().rows;
    let expected = Shape2D::new(rows, cols).half_spectrum();
    if half.shape() != expected {
        return Err(RunError::ShapeMismatch {
            expected,
            actual: half.shape(),
        });
    }

    let half_cols = expected.cols;
    let mut full = SpectralField::zeros(Shape2D::new(rows, cols));
    for i in 0..rows {
        for j in 0..half_cols.min(cols) {
            *full.get_mut(i, j) = half.get(i, j);
        }
    }
    for i in 0..rows {
        for j in half_cols..cols {
            let mirrored = full.get(i, cols - j);
            *full.get_mut(i, j) = mirrored.conj();
        }
    }
    Ok(full)
}
