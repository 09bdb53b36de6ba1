use crate::estimators::approaches::permutation::pattern_utils::symbolize_sequence;
use crate::estimators::approaches::shannon::ShannonEntropy;
use crate::estimators::error::EstimatorError;
use crate::estimators::traits::{GlobalValue, LocalValues};
use ndarray::Array1;

/// Permutation (ordinal pattern) entropy estimator.
///
/// Converts a 1D sequence into rank patterns of `order` samples spaced
/// `delay` apart, Lehmer-codes each pattern, remaps the codes to compact
/// IDs, and computes base-2 Shannon entropy of the pattern distribution.
///
/// Local values correspond to `-log2 p(pattern_t)` for each window `t`.
/// A sequence too short for a single window has entropy 0.
pub struct PermutationEntropy {
    inner: ShannonEntropy,
    pub order: usize,
    pub delay: usize,
}

impl PermutationEntropy {
    /// Build from a 1D sequence with delay fixed to 1.
    pub fn new(data: Array1<f64>, order: usize) -> Result<Self, EstimatorError> {
        Self::with_delay(data, order, 1)
    }

    /// Build from a 1D sequence with a configurable delay (pattern spacing).
    pub fn with_delay(
        data: Array1<f64>,
        order: usize,
        delay: usize,
    ) -> Result<Self, EstimatorError> {
        if order < 1 || order > 20 {
            return Err(EstimatorError::InvalidOrder { order });
        }
        if delay < 1 {
            return Err(EstimatorError::InvalidDelay { delay });
        }
        let codes = symbolize_sequence(&data, order, delay);
        let inner = ShannonEntropy::new(codes.mapv(|c| c as f64));
        Ok(Self {
            inner,
            order,
            delay,
        })
    }

    /// Number of pattern windows the sequence produced.
    pub fn window_count(&self) -> usize {
        self.inner.sample_count()
    }
}

impl GlobalValue for PermutationEntropy {
    fn global_value(&self) -> f64 {
        self.inner.global_value()
    }
}

impl LocalValues for PermutationEntropy {
    fn local_values(&self) -> Array1<f64> {
        self.inner.local_values()
    }
}
