//! Structured parameter-validation errors for the estimator layer.

use thiserror::Error;

/// Rejected estimator parameters.
///
/// Construction is the only fallible step of an estimator; evaluation itself
/// is total and signals degenerate inputs through non-finite values instead
/// of errors (the analysis layer enforces its own finiteness policy).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("logarithm base must be strictly positive and != 1, got {base}")]
    InvalidLogBase { base: f64 },

    #[error("embedding dimension must be >= 1, got {m}")]
    InvalidEmbeddingDimension { m: usize },

    #[error("tolerance must be finite and >= 0, got {r}")]
    InvalidTolerance { r: f64 },

    #[error("pattern order must be in 1..=20, got {order}")]
    InvalidOrder { order: usize },

    #[error("delay must be >= 1, got {delay}")]
    InvalidDelay { delay: usize },

    #[error("scale range must be >= 1, got {scale_range}")]
    InvalidScaleRange { scale_range: usize },
}
