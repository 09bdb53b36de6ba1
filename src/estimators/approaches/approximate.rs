use crate::estimators::approaches::embedding::windows_match;
use crate::estimators::error::EstimatorError;
use crate::estimators::traits::GlobalValue;
use ndarray::Array1;

/// Approximate entropy (ApEn) estimator.
///
/// For embedding dimension `m` and tolerance `r`, computes
/// `phi(m) = (1/(N-m+1)) * sum_i ln(C_i / (N-m+1))` where `C_i` counts the
/// windows (including window `i` itself) within Chebyshev tolerance of
/// window `i`, and returns `|phi(m) - phi(m+1)|`.
///
/// Window matching is inclusive (`distance <= r`), so every window matches
/// itself and the counts never hit `ln(0)`. Sequences too short to form a
/// single window at dimension `m + 1` yield NaN rather than a panic; the
/// analysis layer turns that into a structured error.
///
/// Runtime is O(N^2 * m) in the sequence length: every window is compared
/// against every other.
pub struct ApproximateEntropy {
    data: Array1<f64>,
    m: usize,
    r: f64,
}

impl ApproximateEntropy {
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

    /// The phi statistic at embedding dimension `dim`.
    ///
    /// NaN when the sequence has no window of length `dim`.
    fn phi(&self, dim: usize) -> f64 {
        let data = self.data.as_slice().expect("sequence is contiguous");
        let n = data.len();
        if n < dim {
            return f64::NAN;
        }
        let windows = n - dim + 1;
        let mut log_sum = 0.0_f64;
        for i in 0..windows {
            let template = &data[i..i + dim];
            let mut count = 0usize;
            for j in 0..windows {
                if windows_match(template, &data[j..j + dim], self.r) {
                    count += 1;
                }
            }
            log_sum += (count as f64 / windows as f64).ln();
        }
        log_sum / windows as f64
    }
}

impl GlobalValue for ApproximateEntropy {
    fn global_value(&self) -> f64 {
        (self.phi(self.m) - self.phi(self.m + 1)).abs()
    }
}
