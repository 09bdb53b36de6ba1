//! The unified error type for the analysis layer.
//!
//! Validation failures are raised before any computation begins, and any
//! computation failure aborts the whole call; there is no partial-success
//! mode. Variants carry the offending selections as enum values so callers
//! can branch on structure instead of parsing messages.

use crate::analysis::AlgorithmKind;
use crate::encoding::EncodingScheme;
use crate::estimators::EstimatorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("input text must be a non-empty string")]
    EmptyInput,

    #[error("duplicate encoding selection: {scheme}")]
    DuplicateEncoding { scheme: EncodingScheme },

    #[error("duplicate algorithm selection: {algorithm}")]
    DuplicateAlgorithm { algorithm: AlgorithmKind },

    /// The algorithm exists but is outside the validated selection set.
    /// Multiscale entropy is vector-valued and cannot fill the scalar
    /// entropy field of a result record.
    #[error("algorithm {algorithm} is not in the validated selection set")]
    UnsupportedAlgorithm { algorithm: AlgorithmKind },

    /// A computed entropy value was NaN or infinite. Values that are valid
    /// estimator outputs (sample entropy's infinity) are still rejected
    /// here: a result record always carries a finite number.
    #[error("entropy for {encoding}/{algorithm} is not finite (got {value})")]
    NonFiniteResult {
        encoding: EncodingScheme,
        algorithm: AlgorithmKind,
        value: f64,
    },

    /// An estimator rejected its construction parameters.
    #[error("entropy computation failed for {encoding}/{algorithm}")]
    Computation {
        encoding: EncodingScheme,
        algorithm: AlgorithmKind,
        #[source]
        source: EstimatorError,
    },

    #[error("no entropy results were produced")]
    EmptyResult,

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
