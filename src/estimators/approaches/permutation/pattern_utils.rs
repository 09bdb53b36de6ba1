use ndarray::Array1;
use std::collections::HashMap;

/// Stable argsort for f64 values.
///
/// Fills `idx` with the indices that would sort `window` in ascending order.
/// Ties are resolved by the original index order, so equal values yield a
/// deterministic pattern. NaNs sort after everything else.
pub fn argsort(window: &[f64], idx: &mut [usize]) {
    for (i, val) in idx.iter_mut().enumerate() {
        *val = i;
    }
    idx.sort_by(|&i, &j| {
        let a = window[i];
        let b = window[j];
        match a.partial_cmp(&b) {
            Some(ord) => {
                if ord == core::cmp::Ordering::Equal {
                    i.cmp(&j)
                } else {
                    ord
                }
            }
            None => {
                // One or both are NaN; NaNs sort after everything.
                if a.is_nan() && b.is_nan() {
                    i.cmp(&j)
                } else if a.is_nan() {
                    core::cmp::Ordering::Greater
                } else {
                    core::cmp::Ordering::Less
                }
            }
        }
    });
}

/// Compute the Lehmer code (factoradic ranking) for a given permutation.
///
/// The input is a permutation of 0..m-1 represented as indices in the order
/// they would appear when sorting a window, i.e. the output of [`argsort`].
///
/// Panics if m > 20 (u64 overflow risk for factorial weights).
pub fn lehmer_code(perm: &[usize]) -> u64 {
    let n = perm.len();
    if n > 20 {
        panic!("For pattern orders larger than 20, the code will not fit in u64.");
    }
    let mut fact: Vec<u128> = vec![1u128; n];
    for i in 1..n {
        fact[i] = fact[i - 1] * (i as u128);
    }
    lehmer_code_with_fact(perm, &fact)
}

fn lehmer_code_with_fact(perm: &[usize], fact: &[u128]) -> u64 {
    let n = perm.len();
    let mut acc: u128 = 0;
    for i in 0..n {
        let mut c = 0u128;
        for j in (i + 1)..n {
            if perm[i] > perm[j] {
                c += 1;
            }
        }
        acc += c * fact[n - 1 - i];
    }
    // Fits in u64 for n <= 20
    acc as u64
}

/// Remap raw pattern codes to compact i32 IDs in first-occurrence order.
pub fn remap_to_compact(codes: &Array1<u64>) -> Array1<i32> {
    let mut map: HashMap<u64, i32> = HashMap::with_capacity(codes.len());
    let mut next_id: i32 = 0;
    let mut out = Vec::with_capacity(codes.len());
    for &c in codes.iter() {
        let id = *map.entry(c).or_insert_with(|| {
            let v = next_id;
            next_id = next_id
                .checked_add(1)
                .expect("Too many distinct patterns to fit into i32");
            v
        });
        out.push(id);
    }
    Array1::from(out)
}

/// Convert a sequence into compact ordinal pattern codes.
///
/// Each window takes `order` samples spaced `delay` apart; its rank pattern
/// is Lehmer-coded and the codes are remapped to a compact ID space for the
/// distribution-based estimators. A sequence too short for a single window
/// yields an empty code array.
///
/// - order (m) in 1..=20 (Lehmer code fits in u64)
/// - delay (tau) >= 1
pub fn symbolize_sequence(series: &Array1<f64>, order: usize, delay: usize) -> Array1<i32> {
    let codes_u64 = pattern_codes(series, order, delay);
    remap_to_compact(&codes_u64)
}

/// Raw Lehmer codes (u64) of each window's rank pattern, without remapping.
pub fn pattern_codes(series: &Array1<f64>, order: usize, delay: usize) -> Array1<u64> {
    assert!(order >= 1, "The pattern order must be a positive integer.");
    assert!(delay >= 1, "The delay must be a positive integer.");
    assert!(
        order <= 20,
        "For pattern orders larger than 20, the code will not fit in u64."
    );

    let n = series.len();
    if n == 0 {
        return Array1::<u64>::zeros(0);
    }

    let span = (order - 1) * delay;
    if n <= span {
        return Array1::<u64>::zeros(0);
    }

    let n_windows = n - span;
    let mut out: Vec<u64> = Vec::with_capacity(n_windows);

    // Reuse buffers to avoid repeated allocations
    let mut w: Vec<f64> = vec![0.0; order];
    let mut idx: Vec<usize> = (0..order).collect();

    let mut fact: Vec<u128> = vec![1u128; order];
    for i in 1..order {
        fact[i] = fact[i - 1] * (i as u128);
    }

    for t in 0..n_windows {
        for j in 0..order {
            w[j] = series[t + j * delay];
        }
        argsort(&w, &mut idx);
        out.push(lehmer_code_with_fact(&idx, &fact));
    }
    Array1::from(out)
}
