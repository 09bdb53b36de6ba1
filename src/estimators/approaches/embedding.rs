//! Shared helpers for the windowed (embedding-based) regularity estimators.

use ndarray::Array1;

/// Chebyshev distance: maximum absolute difference across coordinates.
///
/// Both slices must have equal length.
pub fn chebyshev(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Whether two embedding windows match within tolerance `r`.
///
/// Matching is inclusive (`distance <= r`), the canonical convention for
/// approximate and sample entropy: a window always matches itself, and a
/// constant sequence with tolerance 0 is perfectly regular rather than
/// degenerate.
pub fn windows_match(a: &[f64], b: &[f64], r: f64) -> bool {
    chebyshev(a, b) <= r
}

/// Count ordered pairs `(i, j)`, `i != j`, of length-`m` contiguous windows
/// matching within tolerance `r`.
///
/// Returns 0 when the sequence is too short to form two windows. Quadratic
/// in the number of windows.
pub fn matched_window_pairs(data: &[f64], m: usize, r: f64) -> usize {
    let n = data.len();
    if n < m {
        return 0;
    }
    let windows = n - m + 1;
    let mut matched = 0usize;
    for i in 0..windows {
        let template = &data[i..i + m];
        for j in 0..windows {
            if i != j && windows_match(template, &data[j..j + m], r) {
                matched += 1;
            }
        }
    }
    matched
}

/// Sample standard deviation (divisor `n - 1`).
///
/// Returns 0.0 for sequences shorter than 2, so degenerate inputs reach the
/// windowed estimators with a defined tolerance instead of NaN.
pub fn sample_std(data: &Array1<f64>) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let mean = data.sum() / n as f64;
    let var = data.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1) as f64;
    var.sqrt()
}
