use approx::assert_abs_diff_eq;
use ndarray::{Array1, array};
use textropy::estimators::EstimatorError;
use textropy::estimators::approaches::permutation::pattern_utils::{
    argsort, lehmer_code, pattern_codes, symbolize_sequence,
};
use textropy::estimators::entropy::Entropy;
use textropy::estimators::traits::{GlobalValue, LocalValues};

#[test]
fn monotone_sequence_has_zero_entropy() {
    // every window carries the same rank pattern
    let data: Array1<f64> = (0..50).map(|i| i as f64).collect();
    let pe = Entropy::new_permutation(data, 3).unwrap().global_value();
    assert_abs_diff_eq!(pe, 0.0, epsilon = 1e-12);
}

#[test]
fn alternating_sequence_matches_hand_computation() {
    // windows of order 3 over [1,2,1,2,1]: patterns "121" twice, "212" once
    // -> p = [2/3, 1/3], H2 = 0.91829583...
    let data = array![1.0, 2.0, 1.0, 2.0, 1.0];
    let pe = Entropy::new_permutation(data, 3).unwrap().global_value();
    let expected = -((2.0 / 3.0_f64) * (2.0 / 3.0_f64).log2() + (1.0 / 3.0) * (1.0 / 3.0_f64).log2());
    assert_abs_diff_eq!(pe, expected, epsilon = 1e-12);
}

#[test]
fn alternating_sequence_at_order_two_is_one_bit() {
    // up and down patterns, twice each
    let data = array![1.0, 2.0, 1.0, 2.0, 1.0];
    let pe = Entropy::new_permutation(data, 2).unwrap().global_value();
    assert_abs_diff_eq!(pe, 1.0, epsilon = 1e-12);
}

#[test]
fn delay_skips_samples_and_ties_stay_stable() {
    // windows at delay 2 pair equal values; stable ties give one pattern
    let data = array![1.0, 2.0, 1.0, 2.0, 1.0];
    let est = Entropy::new_permutation_with_delay(data, 2, 2).unwrap();
    assert_eq!(est.window_count(), 3);
    assert_abs_diff_eq!(est.global_value(), 0.0, epsilon = 1e-12);
}

#[test]
fn too_short_sequence_has_zero_windows_and_zero_entropy() {
    let est = Entropy::new_permutation(array![1.0, 2.0], 3).unwrap();
    assert_eq!(est.window_count(), 0);
    assert_abs_diff_eq!(est.global_value(), 0.0, epsilon = 1e-12);
}

#[test]
fn local_values_mean_recovers_global() {
    let data = array![4.0, 7.0, 9.0, 10.0, 6.0, 11.0, 3.0];
    let est = Entropy::new_permutation(data, 3).unwrap();
    assert_abs_diff_eq!(est.global_from_local(), est.global_value(), epsilon = 1e-12);
}

#[test]
fn invalid_parameters_are_rejected() {
    let data = array![1.0, 2.0, 3.0];
    assert!(matches!(
        Entropy::new_permutation(data.clone(), 0),
        Err(EstimatorError::InvalidOrder { order: 0 })
    ));
    assert!(matches!(
        Entropy::new_permutation(data.clone(), 21),
        Err(EstimatorError::InvalidOrder { order: 21 })
    ));
    assert!(matches!(
        Entropy::new_permutation_with_delay(data, 3, 0),
        Err(EstimatorError::InvalidDelay { delay: 0 })
    ));
}

#[test]
fn argsort_is_stable_on_ties() {
    let mut idx = [0usize; 4];
    argsort(&[2.0, 1.0, 2.0, 1.0], &mut idx);
    assert_eq!(idx, [1, 3, 0, 2]);
}

#[test]
fn lehmer_codes_enumerate_permutations() {
    assert_eq!(lehmer_code(&[0, 1, 2]), 0);
    assert_eq!(lehmer_code(&[2, 1, 0]), 5);
    // all 3! codes are distinct
    let mut codes: Vec<u64> = [
        [0usize, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ]
    .iter()
    .map(|p| lehmer_code(p))
    .collect();
    codes.sort_unstable();
    assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn symbolization_window_counts() {
    let data: Array1<f64> = (0..10).map(|i| (i as f64).sin()).collect();
    assert_eq!(pattern_codes(&data, 3, 1).len(), 8);
    assert_eq!(pattern_codes(&data, 3, 2).len(), 6);
    assert_eq!(pattern_codes(&data, 4, 3).len(), 1);
    // compact remap preserves window count
    assert_eq!(symbolize_sequence(&data, 3, 2).len(), 6);
}
