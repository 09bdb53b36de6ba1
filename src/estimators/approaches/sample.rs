use crate::estimators::approaches::embedding::matched_window_pairs;
use crate::estimators::error::EstimatorError;
use crate::estimators::traits::GlobalValue;
use ndarray::Array1;

/// Sample entropy (SampEn) estimator.
///
/// `B` counts ordered pairs of distinct length-`m` windows within Chebyshev
/// tolerance, `A` the same at length `m + 1`; the estimate is `-ln(A/B)`.
/// When either count is zero the estimate is positive infinity: the sequence
/// shows no repeating structure at the given tolerance (or is undersampled).
/// That infinity is an intentional output of this estimator, not an error.
///
/// Runtime is O(N^2 * m) in the sequence length.
pub struct SampleEntropy {
    data: Array1<f64>,
    m: usize,
    r: f64,
}

impl SampleEntropy {
    /// Build an estimator for embedding dimension `m` and tolerance `r`.
    ///
    /// `r` is conventionally `0.2 *` the sample standard deviation of the
    /// sequence, supplied by the caller.
    pub fn new(data: Array1<f64>, m: usize, r: f64) -> Result<Self, EstimatorError> {
        if m < 1 {
            return Err(EstimatorError::InvalidEmbeddingDimension { m });
        }
        if !r.is_finite() || r < 0.0 {
            return Err(EstimatorError::InvalidTolerance { r });
        }
        Ok(Self { data, m, r })
    }
}

impl GlobalValue for SampleEntropy {
    fn global_value(&self) -> f64 {
        sample_entropy_value(&self.data, self.m, self.r)
    }
}

/// Core sample entropy computation, shared with the multiscale estimator.
pub(crate) fn sample_entropy_value(data: &Array1<f64>, m: usize, r: f64) -> f64 {
    let slice = data.as_slice().expect("sequence is contiguous");
    let b = matched_window_pairs(slice, m, r);
    let a = matched_window_pairs(slice, m + 1, r);
    if a == 0 || b == 0 {
        return f64::INFINITY;
    }
    -(a as f64 / b as f64).ln()
}
