// SPDX-FileCopyrightText: 2026 textropy contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

pub trait LocalValues: GlobalValue {
    /// Compute and return the local (per-sample) values of the measure.
    /// To be overridden by specific measures.
    fn local_values(&self) -> Array1<f64>;

    /// Derive global_value as the mean of local values.
    fn global_from_local(&self) -> f64 {
        let local_vals = self.local_values();
        local_vals
            .mean()
            .expect("Local values should not be empty.")
    }
}

/// Interface for vector-valued estimators that produce one value per scale
/// factor rather than a single scalar.
///
/// The one implementor is multiscale entropy. Scale-valued estimators do not
/// implement [`GlobalValue`]; the shape mismatch is intentional and is the
/// reason they are not selectable through the analysis entry point.
pub trait ScaleValues {
    /// Compute and return one entropy value per scale, scale 1 first.
    fn scale_values(&self) -> Array1<f64>;
}
