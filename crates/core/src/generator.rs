//! Seeded Gaussian matrix generation.

use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{RunError, RunResult};
use crate::field::RealField;
use crate::grid::Shape2D;

pub const DEFAULT_MEAN: f64 = 1.0;
pub const DEFAULT_STD: f64 = 1.0;

/// Random stream shared by every matrix drawn during one run.
///
/// Xoshiro256++ is a fixed algorithm, so a given seed reproduces the same
/// matrices bit-for-bit on every platform and toolchain.
pub fn seeded_rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Draw an `n x n` matrix of independent `Normal(mean, std)` samples in
/// row-major order.
pub fn gaussian_matrix<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    mean: f64,
    std: f64,
) -> RunResult<RealField> {
    if n == 0 {
        return Err(RunError::InvalidArgument(
            "matrix dimension must be positive".to_string(),
        ));
    }
    if !mean.is_finite() {
        return Err(RunError::InvalidArgument(format!(
            "mean must be finite, got {mean}"
        )));
    }
    let normal = Normal::new(mean, std).map_err(|err| {
        RunError::InvalidArgument(format!("invalid standard deviation {std}: {err}"))
    })?;

    let shape = Shape2D::square(n);
    let data: Vec<f64> = (0..shape.len()).map(|_| normal.sample(&mut *rng)).collect();
    Ok(RealField::from_vec(shape, data))
}
