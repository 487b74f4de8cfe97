//! Error types for weight-matrix validation.

use thiserror::Error;

/// Errors raised when a weight matrix violates the invariants that the
/// spectral machinery depends on.
#[derive(Debug, Clone, Error)]
pub enum GraphError {
    /// The input matrix was not square.
    #[error("weight matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A weight was NaN or infinite.
    #[error("non-finite weight at ({row}, {col})")]
    NonFinite { row: usize, col: usize },

    /// A weight was negative.
    #[error("negative weight at ({row}, {col}): {value}")]
    NegativeWeight { row: usize, col: usize, value: f64 },

    /// `w[i,j]` and `w[j,i]` disagree beyond tolerance. The caller must
    /// symmetrize; it is never done silently here.
    #[error("asymmetric weights at ({row}, {col}): differ by {delta:.3e}")]
    Asymmetric { row: usize, col: usize, delta: f64 },

    /// A builder parameter was outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
