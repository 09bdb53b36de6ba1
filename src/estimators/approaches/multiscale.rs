use crate::estimators::approaches::embedding::sample_std;
use crate::estimators::approaches::sample::sample_entropy_value;
use crate::estimators::error::EstimatorError;
use crate::estimators::traits::ScaleValues;
use ndarray::Array1;

/// Multiscale entropy (MSE) estimator.
///
/// The tolerance coefficient `r` is scaled once by the sample standard
/// deviation of the original sequence. For each scale `s` in
/// `1..=scale_range` the sequence is coarse-grained by averaging
/// non-overlapping blocks of length `s` (a trailing remainder shorter than
/// `s` is dropped) and the sample entropy of the coarse-grained sequence is
/// computed with the pre-scaled tolerance.
///
/// The result is one value per scale, so this estimator implements
/// [`ScaleValues`] instead of [`crate::estimators::traits::GlobalValue`] and
/// is not selectable through the analysis entry point. Individual scale
/// values may be infinite where no window pairs match (see
/// [`crate::estimators::approaches::sample::SampleEntropy`]).
pub struct MultiscaleEntropy {
    data: Array1<f64>,
    scale_range: usize,
    m: usize,
    r_scaled: f64,
}

impl MultiscaleEntropy {
    /// Build an estimator evaluating scales `1..=scale_range` with embedding
    /// dimension `m` and tolerance coefficient `r` (scaled by the sequence's
    /// sample standard deviation).
    pub fn new(
        data: Array1<f64>,
        scale_range: usize,
        m: usize,
        r: f64,
    ) -> Result<Self, EstimatorError> {
        if scale_range < 1 {
            return Err(EstimatorError::InvalidScaleRange { scale_range });
        }
        if m < 1 {
            return Err(EstimatorError::InvalidEmbeddingDimension { m });
        }
        if !r.is_finite() || r < 0.0 {
            return Err(EstimatorError::InvalidTolerance { r });
        }
        let r_scaled = r * sample_std(&data);
        Ok(Self {
            data,
            scale_range,
            m,
            r_scaled,
        })
    }
}

impl ScaleValues for MultiscaleEntropy {
    fn scale_values(&self) -> Array1<f64> {
        let mut mse = Vec::with_capacity(self.scale_range);
        for scale in 1..=self.scale_range {
            let coarse = coarse_grain(&self.data, scale);
            mse.push(sample_entropy_value(&coarse, self.m, self.r_scaled));
        }
        Array1::from(mse)
    }
}

/// Coarse-grain a sequence by averaging non-overlapping blocks of length
/// `scale`, dropping any trailing remainder shorter than a full block.
pub fn coarse_grain(data: &Array1<f64>, scale: usize) -> Array1<f64> {
    assert!(scale >= 1, "The scale factor must be a positive integer.");
    let slice = data.as_slice().expect("sequence is contiguous");
    slice
        .chunks_exact(scale)
        .map(|block| block.iter().sum::<f64>() / scale as f64)
        .collect()
}
