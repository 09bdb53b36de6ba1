use crate::estimators::approaches::{
    approximate, multiscale, permutation::permutation_estimator, sample, shannon,
};
use crate::estimators::error::EstimatorError;
use ndarray::Array1;
pub use crate::estimators::traits::{GlobalValue, LocalValues, ScaleValues};

/// Entropy estimation methods for 1D numeric sequences
///
/// This struct provides static methods for creating the entropy estimators
/// in [`crate::estimators::approaches`] with validated parameters.
pub struct Entropy;

impl Entropy {
    /// Creates a new base-2 Shannon entropy estimator
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sequence data
    ///
    /// # Returns
    ///
    /// A Shannon entropy estimator over the empirical value distribution
    pub fn new_shannon(data: Array1<f64>) -> shannon::ShannonEntropy {
        shannon::ShannonEntropy::new(data)
    }

    /// Creates a new Shannon entropy estimator with an explicit logarithm base
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sequence data
    /// * `base` - Logarithm base, strictly positive and not 1
    pub fn new_shannon_with_base(
        data: Array1<f64>,
        base: f64,
    ) -> Result<shannon::ShannonEntropy, EstimatorError> {
        shannon::ShannonEntropy::with_base(data, base)
    }

    /// Creates a new approximate entropy (ApEn) estimator
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sequence data
    /// * `m` - Embedding dimension (window length)
    /// * `r` - Chebyshev tolerance, conventionally `0.2 *` the sample
    ///   standard deviation of `data`
    ///
    /// # Complexity
    ///
    /// Evaluation compares every pair of embedding windows and is quadratic
    /// in the sequence length.
    pub fn new_approximate(
        data: Array1<f64>,
        m: usize,
        r: f64,
    ) -> Result<approximate::ApproximateEntropy, EstimatorError> {
        approximate::ApproximateEntropy::new(data, m, r)
    }

    /// Creates a new sample entropy (SampEn) estimator
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sequence data
    /// * `m` - Embedding dimension (window length)
    /// * `r` - Chebyshev tolerance, conventionally `0.2 *` the sample
    ///   standard deviation of `data`
    ///
    /// # Complexity
    ///
    /// Evaluation compares every pair of embedding windows and is quadratic
    /// in the sequence length.
    pub fn new_sample(
        data: Array1<f64>,
        m: usize,
        r: f64,
    ) -> Result<sample::SampleEntropy, EstimatorError> {
        sample::SampleEntropy::new(data, m, r)
    }

    /// Creates a new permutation entropy estimator with delay 1
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sequence data
    /// * `order` - Pattern order (number of samples per window), 1..=20
    pub fn new_permutation(
        data: Array1<f64>,
        order: usize,
    ) -> Result<permutation_estimator::PermutationEntropy, EstimatorError> {
        permutation_estimator::PermutationEntropy::new(data, order)
    }

    /// Creates a new permutation entropy estimator with an explicit delay
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sequence data
    /// * `order` - Pattern order (number of samples per window), 1..=20
    /// * `delay` - Spacing between samples of a window, >= 1
    pub fn new_permutation_with_delay(
        data: Array1<f64>,
        order: usize,
        delay: usize,
    ) -> Result<permutation_estimator::PermutationEntropy, EstimatorError> {
        permutation_estimator::PermutationEntropy::with_delay(data, order, delay)
    }

    /// Creates a new multiscale entropy (MSE) estimator
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional sequence data
    /// * `scale_range` - Largest coarse-graining scale, >= 1
    /// * `m` - Embedding dimension for the per-scale sample entropy
    /// * `r` - Tolerance coefficient, scaled once by the sample standard
    ///   deviation of `data`
    ///
    /// # Returns
    ///
    /// A vector-valued estimator producing one entropy value per scale via
    /// [`ScaleValues`]
    pub fn new_multiscale(
        data: Array1<f64>,
        scale_range: usize,
        m: usize,
        r: f64,
    ) -> Result<multiscale::MultiscaleEntropy, EstimatorError> {
        multiscale::MultiscaleEntropy::new(data, scale_range, m, r)
    }
}
