//! Backend trait for 2-D spectral transforms.
//!
//! # Conventions
//!
//! - Forward transforms are unnormalized: the `[0, 0]` (DC) coefficient is the
//!   plain sum of all input samples.
//! - Inverse transforms carry the full `1 / (rows * cols)` normalization, so a
//!   forward/inverse pair is the identity up to rounding.
//! - Real-input transforms use half-spectrum packing: a `rows x cols` real
//!   input maps to `rows x (cols / 2 + 1)` complex coefficients, the remaining
//!   columns being implied by conjugate symmetry.

use crate::error::RunResult;
use crate::field::{RealField, SpectralField};

pub trait SpectralBackend {
    /// Human-readable backend name for logs and metrics.
    fn name(&self) -> &'static str;

    /// In-place forward complex-to-complex transform.
    fn forward_fft_2d(&self, buffer: &mut SpectralField);

    /// In-place normalized inverse complex-to-complex transform.
    fn inverse_fft_2d(&self, buffer: &mut SpectralField);

    /// Forward real-to-complex transform returning the half spectrum.
    fn forward_real_fft_2d(&self, input: &RealField) -> SpectralField;

    /// Normalized inverse of [`forward_real_fft_2d`](Self::forward_real_fft_2d).
    ///
    /// `cols` is the width of the real output; the spectrum must be
    /// `rows x (cols / 2 + 1)`. Imaginary parts the half spectrum cannot
    /// represent (DC and Nyquist columns) are discarded.
    fn inverse_real_fft_2d(&self, spectrum: &SpectralField, cols: usize) -> RunResult<RealField>;

    /// Forward transform of a real input, keeping the full spectrum.
    fn forward_fft_2d_real(&self, input: &RealField) -> SpectralField {
        let mut buffer = input.to_complex();
        self.forward_fft_2d(&mut buffer);
        buffer
    }
}
