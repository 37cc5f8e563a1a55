//! Contiguous row-major matrix storage.
//!
//! A single generic container covers both sides of a transform:
//! [`RealField`] holds spatial-domain samples and [`SpectralField`] holds
//! complex spectra (full `N x N` or half `N x (N/2 + 1)`).

use num_complex::Complex64;

use crate::grid::Shape2D;

#[derive(Debug, Clone, PartialEq)]
pub struct Field2D<T> {
    shape: Shape2D,
    data: Vec<T>,
}

pub type RealField = Field2D<f64>;
pub type SpectralField = Field2D<Complex64>;

impl<T: Copy + Default> Field2D<T> {
    pub fn zeros(shape: Shape2D) -> Self {
        Self {
            data: vec![T::default(); shape.len()],
            shape,
        }
    }
}

impl<T: Copy> Field2D<T> {
    pub fn from_vec(shape: Shape2D, data: Vec<T>) -> Self {
        assert_eq!(data.len(), shape.len(), "data length must match shape");
        Self { shape, data }
    }

    pub fn from_fn(shape: Shape2D, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(shape.len());
        for row in 0..shape.rows {
            for col in 0..shape.cols {
                data.push(f(row, col));
            }
        }
        Self { shape, data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn shape(&self) -> Shape2D {
        self.shape
    }

    pub fn idx(&self, row: usize, col: usize) -> usize {
        self.shape.idx(row, col)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.idx(row, col)]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let idx = self.idx(row, col);
        &mut self.data[idx]
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.shape.cols;
        &self.data[start..start + self.shape.cols]
    }

    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> Field2D<U> {
        Field2D {
            shape: self.shape,
            data: self.data.iter().map(|&value| f(value)).collect(),
        }
    }
}

impl RealField {
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    pub fn to_complex(&self) -> SpectralField {
        self.map(|value| Complex64::new(value, 0.0))
    }
}

impl SpectralField {
    pub fn real_part(&self) -> RealField {
        self.map(|value| value.re)
    }

    /// Element-wise magnitudes.
    pub fn norms(&self) -> RealField {
        self.map(|value| value.norm())
    }
}

impl<T> From<Field2D<T>> for Vec<T> {
    fn from(field: Field2D<T>) -> Self {
        field.data
    }
}
