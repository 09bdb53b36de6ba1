// SPDX-FileCopyrightText: 2026 textropy contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # textropy
//!
//! Entropy analysis toolkit for text: encode a string into numeric sequences
//! under several encoding schemes and measure their unpredictability with
//! several information-theoretic estimators.
//!
//! ## Quick Start
//!
//! ```rust
//! use textropy::analysis::{AlgorithmKind, analyze};
//! use textropy::encoding::EncodingScheme;
//!
//! // Defaults: Frequency encoding x {Shannon, Approximate, Sample, Permutation}
//! let response = analyze("the quick brown fox", None, None).unwrap();
//! assert_eq!(response.results.len(), 4);
//!
//! // Explicit selections, computed in request order
//! let response = analyze(
//!     "the quick brown fox",
//!     Some(&[EncodingScheme::Ordinal, EncodingScheme::Binary]),
//!     Some(&[AlgorithmKind::Shannon, AlgorithmKind::Permutation]),
//! )
//! .unwrap();
//! assert_eq!(response.results.len(), 4);
//! ```
//!
//! Individual estimators are available through the [`estimators::entropy::Entropy`]
//! factory:
//!
//! ```rust
//! use textropy::estimators::entropy::Entropy;
//! use textropy::estimators::traits::GlobalValue;
//! use ndarray::array;
//!
//! let data = array![1.0, 2.0, 1.0, 3.0, 2.0, 1.0];
//! let shannon = Entropy::new_shannon(data).global_value();
//! assert!(shannon > 0.0);
//! ```
//!
//! ## Encoding Schemes
//!
//! | Scheme | Element per character | Sequence length |
//! |--------|-----------------------|-----------------|
//! | `Ordinal` | code point | `len` |
//! | `OneHot` | one row of the alphabet-indicator matrix, flattened | `len * k` |
//! | `Frequency` | relative occurrence count | `len` |
//! | `Binary` | fixed-width bit expansion of the code point | `len * width` |
//!
//! ## Estimators
//!
//! - **Shannon**: plug-in entropy of the empirical value distribution.
//! - **Approximate (ApEn)**: regularity statistic `|phi(m) - phi(m+1)|` over
//!   Chebyshev-matched embedding windows.
//! - **Sample (SampEn)**: `-ln(A/B)` over matched window pairs; positive
//!   infinity when no pairs match.
//! - **Permutation**: base-2 Shannon entropy of ordinal pattern frequencies.
//! - **Multiscale**: Sample entropy of coarse-grained copies of the sequence,
//!   one value per scale. Vector-valued, so it is not selectable through
//!   [`analysis::analyze`].
//!
//! Approximate and Sample entropy compare every pair of embedding windows and
//! are therefore quadratic in sequence length.
//!
//! ## Architecture
//!
//! 1. **Encoding layer**: pure text-to-sequence transforms ([`encoding`])
//! 2. **Estimation layer**: pure estimator structs behind small traits
//!    ([`estimators`])
//! 3. **Analysis layer**: request validation, cross-product orchestration,
//!    and the finiteness policy ([`analysis`])
//!
//! Data flows one direction (text -> sequence -> entropy -> result record);
//! nothing is cached or shared between calls.

pub mod analysis;
pub mod encoding;
pub mod estimators;

/// Version of the running library, fixed at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library's semantic version string.
pub fn version() -> &'static str {
    VERSION
}
