//! CPU spectral backend built on rustfft.
//!
//! 2-D transforms are separable: a pass of 1-D transforms over every row,
//! followed by a pass over every column (gathered into a scratch buffer).
//! Real-input transforms run the row pass on the real rows and keep only the
//! `cols / 2 + 1` non-redundant bins before the column pass; the inverse
//! undoes the column pass on the half spectrum, then rebuilds each full row
//! from its conjugate-symmetric half before the inverse row pass.

use std::cell::RefCell;
use std::sync::Arc;

use fftcheck_core::backend::SpectralBackend;
use fftcheck_core::error::{ensure_shape, RunResult};
use fftcheck_core::field::{RealField, SpectralField};
use fftcheck_core::grid::Shape2D;
use num_complex::Complex64;
use rustfft::{Fft, FftDirection, FftPlanner};

pub struct CpuBackend {
    planner: RefCell<FftPlanner<f64>>,
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuBackend {
    pub fn new() -> Self {
        Self {
            planner: RefCell::new(FftPlanner::new()),
        }
    }

    fn plan(&self, len: usize, direction: FftDirection) -> Arc<dyn Fft<f64>> {
        self.planner.borrow_mut().plan_fft(len, direction)
    }

    fn row_pass(&self, data: &mut [Complex64], shape: Shape2D, direction: FftDirection) {
        if shape.is_empty() {
            return;
        }
        let fft = self.plan(shape.cols, direction);
        let mut scratch = vec![Complex64::ZERO; fft.get_inplace_scratch_len()];
        for row in data.chunks_exact_mut(shape.cols) {
            fft.process_with_scratch(row, &mut scratch);
        }
    }

    fn column_pass(&self, data: &mut [Complex64], shape: Shape2D, direction: FftDirection) {
        if shape.is_empty() {
            return;
        }
        let fft = self.plan(shape.rows, direction);
        let mut scratch = vec![Complex64::ZERO; fft.get_inplace_scratch_len()];
        let mut col_buf = vec![Complex64::ZERO; shape.rows];
        for col in 0..shape.cols {
            for row in 0..shape.rows {
                col_buf[row] = data[shape.idx(row, col)];
            }
            fft.process_with_scratch(&mut col_buf, &mut scratch);
            for row in 0..shape.rows {
                data[shape.idx(row, col)] = col_buf[row];
            }
        }
    }
}

impl SpectralBackend for CpuBackend {
    fn name(&self) -> &'static str {
        "cpu-rustfft"
    }

    fn forward_fft_2d(&self, buffer: &mut SpectralField) {
        let shape = buffer.shape();
        self.row_pass(buffer.as_mut_slice(), shape, FftDirection::Forward);
        self.column_pass(buffer.as_mut_slice(), shape, FftDirection::Forward);
    }

    fn inverse_fft_2d(&self, buffer: &mut SpectralField) {
        let shape = buffer.shape();
        let scale = 1.0 / shape.len() as f64;
        self.row_pass(buffer.as_mut_slice(), shape, FftDirection::Inverse);
        self.column_pass(buffer.as_mut_slice(), shape, FftDirection::Inverse);
        for value in buffer.as_mut_slice() {
            *value *= scale;
        }
    }

    fn forward_real_fft_2d(&self, input: &RealField) -> SpectralField {
        let shape = input.shape();
        let half = shape.half_spectrum();
        let mut spectrum = SpectralField::zeros(half);
        if shape.is_empty() {
            return spectrum;
        }

        let fft = self.plan(shape.cols, FftDirection::Forward);
        let mut scratch = vec![Complex64::ZERO; fft.get_inplace_scratch_len()];
        let mut row_buf = vec![Complex64::ZERO; shape.cols];
        for row in 0..shape.rows {
            for (dst, &src) in row_buf.iter_mut().zip(input.row(row)) {
                *dst = Complex64::new(src, 0.0);
            }
            fft.process_with_scratch(&mut row_buf, &mut scratch);
            for col in 0..half.cols {
                *spectrum.get_mut(row, col) = row_buf[col];
            }
        }

        self.column_pass(spectrum.as_mut_slice(), half, FftDirection::Forward);
        log::debug!("r2c {} -> {}", shape, half);
        spectrum
    }

    fn inverse_real_fft_2d(&self, spectrum: &SpectralField, cols: usize) -> RunResult<RealField> {
        let half = spectrum.shape();
        let shape = Shape2D::new(half.rows, cols);
        ensure_shape(shape.half_spectrum(), half)?;
        let mut output = RealField::zeros(shape);
        if shape.is_empty() {
            return Ok(output);
        }

        let mut work = spectrum.clone();
        self.column_pass(work.as_mut_slice(), half, FftDirection::Inverse);

        let fft = self.plan(cols, FftDirection::Inverse);
        let mut scratch = vec![Complex64::ZERO; fft.get_inplace_scratch_len()];
        let mut row_buf = vec![Complex64::ZERO; cols];
        let scale = 1.0 / shape.len() as f64;
        for row in 0..shape.rows {
            let bins = work.row(row);
            for (col, slot) in row_buf.iter_mut().enumerate() {
                *slot = if col < half.cols {
                    bins[col]
                } else {
                    bins[cols - col].conj()
                };
            }
            fft.process_with_scratch(&mut row_buf, &mut scratch);
            for (col, value) in row_buf.iter().enumerate() {
                *output.get_mut(row, col) = value.re * scale;
            }
        }
        log::debug!("c2r {} -> {}", half, shape);
        Ok(output)
    }
}
