// SPDX-FileCopyrightText: 2026 textropy contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Orchestration layer: request validation, cross-product execution, and
//! result aggregation.
//!
//! [`analyze`] drives the [`crate::encoding`] and [`crate::estimators`]
//! layers over the cross product of the requested encodings and algorithms.
//! Each encoding is computed once; every produced entropy value must be
//! finite or the whole call fails. Calls share no state and may run
//! concurrently from independent threads.

pub mod error;

pub use error::AnalysisError;

use crate::encoding::{self, EncodingScheme};
use crate::estimators::approaches::embedding::sample_std;
use crate::estimators::entropy::Entropy;
use crate::estimators::traits::GlobalValue;
use log::{debug, trace};
use ndarray::Array1;
use serde::Serialize;
use std::fmt;

/// Embedding dimension used for the windowed estimators.
const EMBEDDING_DIMENSION: usize = 2;
/// Tolerance coefficient applied to the encoded sequence's sample standard
/// deviation for the windowed estimators.
const TOLERANCE_COEFFICIENT: f64 = 0.2;
/// Pattern order for the permutation estimator.
const PATTERN_ORDER: usize = 3;
/// Pattern delay for the permutation estimator.
const PATTERN_DELAY: usize = 1;

/// Default encodings when the request omits them.
pub const DEFAULT_ENCODINGS: [EncodingScheme; 1] = [EncodingScheme::Frequency];

/// Entropy estimation algorithms addressable by the analysis layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlgorithmKind {
    #[serde(rename = "shannon_entropy")]
    Shannon,
    #[serde(rename = "approximate_entropy")]
    Approximate,
    #[serde(rename = "sample_entropy")]
    Sample,
    #[serde(rename = "permutation_entropy")]
    Permutation,
    /// Callable through [`crate::estimators::entropy::Entropy`] but never
    /// selectable here: its result is one value per scale, not a scalar.
    #[serde(rename = "multiscale_entropy")]
    Multiscale,
}

impl AlgorithmKind {
    /// The validated selection set, in default execution order.
    pub const VALIDATED: [AlgorithmKind; 4] = [
        AlgorithmKind::Shannon,
        AlgorithmKind::Approximate,
        AlgorithmKind::Sample,
        AlgorithmKind::Permutation,
    ];

    /// Canonical wire name of the algorithm, stable for downstream consumers.
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKind::Shannon => "shannon_entropy",
            AlgorithmKind::Approximate => "approximate_entropy",
            AlgorithmKind::Sample => "sample_entropy",
            AlgorithmKind::Permutation => "permutation_entropy",
            AlgorithmKind::Multiscale => "multiscale_entropy",
        }
    }

    /// Whether the algorithm belongs to the validated selection set.
    pub fn is_validated(self) -> bool {
        !matches!(self, AlgorithmKind::Multiscale)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One computed entropy value for an (encoding, algorithm) pair.
///
/// Created only after a successful, finite computation; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntropyResult {
    pub encoding: EncodingScheme,
    pub algorithm: AlgorithmKind,
    pub entropy: f64,
}

/// Ordered collection of entropy results, one per computed pair, in the
/// order encodings were requested and, within each encoding, the order
/// algorithms were requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntropyResponse {
    pub results: Vec<EntropyResult>,
}

impl EntropyResponse {
    /// Shape the response as a JSON document: one object per result with
    /// `encoding`, `algorithm`, and `entropy` fields under a `results` key.
    pub fn to_json(&self) -> Result<serde_json::Value, AnalysisError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Analyze `text` over the cross product of the requested encodings and
/// algorithms.
///
/// `encodings` defaults to `[Frequency]`; `algorithms` defaults to
/// [`AlgorithmKind::VALIDATED`]. Explicit selections must be free of
/// duplicates, and algorithms must come from the validated set. All
/// validation happens before any computation; any failure aborts the whole
/// call.
///
/// The windowed estimators run with embedding dimension 2 and tolerance
/// `0.2 *` the encoded sequence's sample standard deviation; permutation
/// entropy runs with order 3 and delay 1. Note that approximate and sample
/// entropy are quadratic in the encoded sequence length, which for `OneHot`
/// is text length times alphabet size.
pub fn analyze(
    text: &str,
    encodings: Option<&[EncodingScheme]>,
    algorithms: Option<&[AlgorithmKind]>,
) -> Result<EntropyResponse, AnalysisError> {
    if text.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let encodings: Vec<EncodingScheme> = match encodings {
        None => DEFAULT_ENCODINGS.to_vec(),
        Some(list) => {
            if let Some(scheme) = first_duplicate(list) {
                return Err(AnalysisError::DuplicateEncoding { scheme });
            }
            list.to_vec()
        }
    };

    let algorithms: Vec<AlgorithmKind> = match algorithms {
        None => AlgorithmKind::VALIDATED.to_vec(),
        Some(list) => {
            if let Some(algorithm) = first_duplicate(list) {
                return Err(AnalysisError::DuplicateAlgorithm { algorithm });
            }
            if let Some(&algorithm) = list.iter().find(|a| !a.is_validated()) {
                return Err(AnalysisError::UnsupportedAlgorithm { algorithm });
            }
            list.to_vec()
        }
    };

    debug!(
        "analyzing {} chars: {} encodings x {} algorithms",
        text.chars().count(),
        encodings.len(),
        algorithms.len()
    );

    let mut results = Vec::with_capacity(encodings.len() * algorithms.len());
    for &scheme in &encodings {
        let sequence = encoding::encode(text, scheme);
        for &algorithm in &algorithms {
            let entropy = entropy_value(scheme, &sequence, algorithm)?;
            if !entropy.is_finite() {
                return Err(AnalysisError::NonFiniteResult {
                    encoding: scheme,
                    algorithm,
                    value: entropy,
                });
            }
            trace!("{scheme}/{algorithm}: {entropy}");
            results.push(EntropyResult {
                encoding: scheme,
                algorithm,
                entropy,
            });
        }
    }

    if results.is_empty() {
        return Err(AnalysisError::EmptyResult);
    }
    Ok(EntropyResponse { results })
}

/// Compute one entropy value with the layer's conventional parameters.
fn entropy_value(
    scheme: EncodingScheme,
    sequence: &Array1<f64>,
    algorithm: AlgorithmKind,
) -> Result<f64, AnalysisError> {
    let wrap = |source| AnalysisError::Computation {
        encoding: scheme,
        algorithm,
        source,
    };
    match algorithm {
        AlgorithmKind::Shannon => Ok(Entropy::new_shannon(sequence.clone()).global_value()),
        AlgorithmKind::Approximate => {
            let r = TOLERANCE_COEFFICIENT * sample_std(sequence);
            Ok(Entropy::new_approximate(sequence.clone(), EMBEDDING_DIMENSION, r)
                .map_err(wrap)?
                .global_value())
        }
        AlgorithmKind::Sample => {
            let r = TOLERANCE_COEFFICIENT * sample_std(sequence);
            Ok(Entropy::new_sample(sequence.clone(), EMBEDDING_DIMENSION, r)
                .map_err(wrap)?
                .global_value())
        }
        AlgorithmKind::Permutation => Ok(Entropy::new_permutation_with_delay(
            sequence.clone(),
            PATTERN_ORDER,
            PATTERN_DELAY,
        )
        .map_err(wrap)?
        .global_value()),
        // Rejected during validation; kept exhaustive so a new algorithm
        // cannot be added without a handler.
        AlgorithmKind::Multiscale => Err(AnalysisError::UnsupportedAlgorithm { algorithm }),
    }
}

/// First entry that repeats an earlier one, if any.
fn first_duplicate<T: Copy + PartialEq>(items: &[T]) -> Option<T> {
    for (i, &item) in items.iter().enumerate() {
        if items[..i].contains(&item) {
            return Some(item);
        }
    }
    None
}
