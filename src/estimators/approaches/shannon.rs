use crate::estimators::approaches::distribution::ValueDistribution;
use crate::estimators::error::EstimatorError;
use crate::estimators::traits::{GlobalValue, LocalValues};
use ndarray::Array1;

/// Plug-in Shannon entropy estimator over the empirical value distribution.
///
/// Computes `H = -sum p_i log_base(p_i)` from empirical probabilities
/// `p_i = n_i / N`. Supports local values, where each sample contributes
/// `-log_base p(x)`.
///
/// The default base is 2 (entropy in bits); any base that is strictly
/// positive and not 1 is accepted through [`ShannonEntropy::with_base`].
/// A constant sequence has entropy 0, and a sequence uniform over `k`
/// distinct values has entropy `log_base(k)`.
pub struct ShannonEntropy {
    dataset: ValueDistribution,
    base: f64,
}

impl ShannonEntropy {
    /// Build a base-2 estimator from raw 1D data.
    pub fn new(data: Array1<f64>) -> Self {
        Self {
            dataset: ValueDistribution::from_data(data),
            base: 2.0,
        }
    }

    /// Build an estimator with an explicit logarithm base.
    pub fn with_base(data: Array1<f64>, base: f64) -> Result<Self, EstimatorError> {
        if !(base > 0.0) || base == 1.0 {
            return Err(EstimatorError::InvalidLogBase { base });
        }
        Ok(Self {
            dataset: ValueDistribution::from_data(data),
            base,
        })
    }

    /// Number of distinct values observed.
    pub fn distinct_values(&self) -> usize {
        self.dataset.k
    }

    /// Number of observations.
    pub fn sample_count(&self) -> usize {
        self.dataset.n
    }
}

impl GlobalValue for ShannonEntropy {
    /// Calculate global entropy for the data set.
    /// Separate implementation, not inferred from local_values.
    fn global_value(&self) -> f64 {
        let n_f = self.dataset.n as f64;
        // -sum(p * log p). Order of iteration doesn't matter for the sum.
        let mut h = 0.0_f64;
        for &cnt in self.dataset.counts.values() {
            let p = (cnt as f64) / n_f;
            h -= if p > 0.0 { p * p.log(self.base) } else { 0.0 };
        }
        h
    }
}

impl LocalValues for ShannonEntropy {
    /// Calculate local entropy values for each element in the dataset.
    fn local_values(&self) -> Array1<f64> {
        // Map each value to its probability: local = -log_base p(x)
        let base = self.base;
        let p_local = self.dataset.map_probs();
        -p_local.mapv(|p| p.log(base))
    }
}
