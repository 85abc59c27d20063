// src/error.rs
//! Error type shared by every vector operation.

use thiserror::Error;

/// Failures raised by vector construction and vector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// A fixed-size vector was built from the wrong number of components.
    #[error("invalid dimension: expected {expected} components, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    /// Two operands of a binary operation have different dimensions.
    #[error("dimension mismatch in `{op}`: expected {expected}, got {actual}")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The operation only exists for 3-dimensional vectors.
    #[error("`{op}` is not defined for {dims}-dimensional vectors (only for 3)")]
    NotImplemented { op: &'static str, dims: usize },

    /// Component index past the end of the vector.
    #[error("index {index} out of bounds for {dims}-dimensional vector")]
    IndexOutOfBounds { index: usize, dims: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;
