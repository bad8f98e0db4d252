use thiserror::Error;

/// Error type shared by the matrix, solver and estimator layers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatrixError {
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("Index out of bounds: index {index} for axis {axis} with size {size}")]
    IndexOutOfBounds {
        index: usize,
        axis: usize,
        size: usize,
    },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Singular matrix: system is rank deficient")]
    SingularMatrix,

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Empty matrix")]
    EmptyMatrix,

    #[error("Model not fitted")]
    NotFitted,
}

pub type MatrixResult<T> = Result<T, MatrixError>;
