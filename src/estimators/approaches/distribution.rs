use ndarray::Array1;
use std::collections::HashMap;

/// Shared empirical distribution over the distinct values of a sequence.
///
/// Values are keyed by their IEEE-754 bit pattern, so equality is exact
/// bit-level equality. Encoded text sequences only ever contain values that
/// are either exact integers or exact ratios of the same division, so equal
/// symbols always share a bit pattern.
pub struct ValueDistribution {
    /// Original data (1D)
    pub data: Array1<f64>,
    /// Counts per distinct value, keyed by bit pattern
    pub counts: HashMap<u64, usize>,
    /// Total number of observations
    pub n: usize,
    /// Number of distinct values
    pub k: usize,
    /// Probability p(x) per distinct value, keyed by bit pattern
    pub dist: HashMap<u64, f64>,
}

impl ValueDistribution {
    /// Build a ValueDistribution from raw 1D data.
    pub fn from_data(data: Array1<f64>) -> Self {
        let n = data.len();
        let counts = count_values(&data);
        let k = counts.len();
        let n_f = n as f64;
        let mut dist = HashMap::with_capacity(k);
        for (bits, cnt) in counts.iter() {
            dist.insert(*bits, *cnt as f64 / n_f);
        }
        Self {
            data,
            counts,
            n,
            k,
            dist,
        }
    }

    /// Map each sample to its probability using the cached distribution.
    pub fn map_probs(&self) -> Array1<f64> {
        self.data.mapv(|v| self.dist[&v.to_bits()])
    }
}

/// Count the occurrences of each distinct value in a sequence.
pub fn count_values(data: &Array1<f64>) -> HashMap<u64, usize> {
    let mut frequency_map = HashMap::new();
    for &value in data.iter() {
        *frequency_map.entry(value.to_bits()).or_insert(0) += 1;
    }
    frequency_map
}
