//! Failure kinds of a run.

use crate::grid::Shape2D;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: Shape2D, actual: Shape2D },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RunResult<T> = Result<T, RunError>;

pub fn ensure_shape(expected: Shape2D, actual: Shape2D) -> RunResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(RunError::ShapeMismatch { expected, actual })
    }
}
