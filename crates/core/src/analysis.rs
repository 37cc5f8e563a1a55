//! Reconstruction error statistics.
//!
//! The "mean" and "median" statistics here are quadratic: the mean is the
//! root of the mean of squared deviations (RMS) and the median is the root of
//! the median of squared deviations. The report format depends on this
//! convention; it is not plain mean/median absolute error.

use serde::Serialize;

use crate::error::{ensure_shape, RunError, RunResult};
use crate::field::RealField;

/// Elements whose original magnitude does not exceed this are excluded from
/// the relative statistics.
pub const RELATIVE_THRESHOLD: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorStats {
    pub mean_abs: f64,
    pub median_abs: f64,
    pub mean_rel: f64,
    pub median_rel: f64,
    /// Number of elements that entered the relative statistics.
    pub count: usize,
}

impl ErrorStats {
    pub fn between(original: &RealField, reconstructed: &RealField) -> RunResult<Self> {
        ensure_shape(original.shape(), reconstructed.shape())?;
        Self::from_slices(original.as_slice(), reconstructed.as_slice())
    }

    /// Statistics over two equal-length sample sequences.
    ///
    /// When no original value passes [`RELATIVE_THRESHOLD`] the relative
    /// statistics are NaN and `count` is zero. Sequences of different length
    /// are rejected with [`RunError::InvalidArgument`].
    pub fn from_slices(original: &[f64], reconstructed: &[f64]) -> RunResult<Self> {
        if original.len() != reconstructed.len() {
            return Err(RunError::InvalidArgument(format!(
                "original has {} samples, reconstructed has {}",
                original.len(),
                reconstructed.len()
            )));
        }

        let mut abs_sq = Vec::with_capacity(original.len());
        let mut rel_sq = Vec::with_capacity(original.len());
        for (&orig, &rec) in original.iter().zip(reconstructed) {
            let abs = (orig - rec).abs();
            abs_sq.push(abs * abs);
            let magnitude = orig.abs();
            if magnitude > RELATIVE_THRESHOLD {
                let rel = abs / magnitude;
                rel_sq.push(rel * rel);
            }
        }

        let count = rel_sq.len();
        Ok(Self {
            mean_abs: mean(&abs_sq).sqrt(),
            median_abs: median(&mut abs_sq).sqrt(),
            mean_rel: mean(&rel_sq).sqrt(),
            median_rel: median(&mut rel_sq).sqrt(),
            count,
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median with the even-length convention of averaging the two middle values.
/// Reorders `values`.
fn median(values: &mut [f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return f64::NAN;
    }
    values.sort_unstable_by(f64::total_cmp);
    let mid = n / 2;
    if n % 2 == 1 {
        values[mid]
    } else {
        0.5 * (values[mid - 1] + values[mid])
    }
}
