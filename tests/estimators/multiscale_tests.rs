use approx::assert_abs_diff_eq;
use ndarray::{Array1, array};
use textropy::estimators::EstimatorError;
use textropy::estimators::approaches::multiscale::coarse_grain;
use textropy::estimators::entropy::Entropy;
use textropy::estimators::traits::ScaleValues;

#[test]
fn coarse_graining_averages_blocks_and_drops_remainder() {
    let data = array![1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(coarse_grain(&data, 2), array![1.5, 3.5]);
    assert_eq!(coarse_grain(&data, 3), array![2.0]);
    // scale 1 is the identity
    assert_eq!(coarse_grain(&data, 1), data);
    // block longer than the sequence leaves nothing
    assert_eq!(coarse_grain(&data, 6), Array1::<f64>::zeros(0));
}

#[test]
fn constant_sequence_matches_hand_computed_scales() {
    // std = 0 so the scaled tolerance is 0; all window pairs still match.
    // scale 1: n=8, m=2 -> B = 7*6, A = 6*5, -ln(30/42) = ln(7/5)
    // scale 2: n=4, m=2 -> B = 3*2,  A = 2*1,  -ln(2/6)  = ln 3
    let data = Array1::from_elem(8, 2.0);
    let mse = Entropy::new_multiscale(data, 2, 2, 0.2)
        .unwrap()
        .scale_values();
    assert_eq!(mse.len(), 2);
    assert_abs_diff_eq!(mse[0], (7.0_f64 / 5.0).ln(), epsilon = 1e-12);
    assert_abs_diff_eq!(mse[1], 3.0_f64.ln(), epsilon = 1e-12);
}

#[test]
fn one_value_per_scale() {
    let data: Array1<f64> = (0..64).map(|i| ((i * 7) % 13) as f64).collect();
    let mse = Entropy::new_multiscale(data, 5, 2, 0.2)
        .unwrap()
        .scale_values();
    assert_eq!(mse.len(), 5);
}

#[test]
fn unmatched_scales_surface_sample_entropys_infinity() {
    // strictly increasing sequence with a tiny tolerance coefficient:
    // no window pairs match at any scale
    let data: Array1<f64> = (0..16).map(|i| i as f64).collect();
    let mse = Entropy::new_multiscale(data, 2, 2, 1e-9)
        .unwrap()
        .scale_values();
    assert!(mse.iter().all(|v| v.is_infinite() && *v > 0.0));
}

#[test]
fn tolerance_scales_with_the_original_sequence_std() {
    // identical shape, different amplitude: the relative tolerance makes the
    // per-scale entropies amplitude-invariant
    let base: Array1<f64> = (0..32).map(|i| ((i * 11) % 7) as f64).collect();
    let scaled: Array1<f64> = base.mapv(|v| v * 1000.0);

    let mse_base = Entropy::new_multiscale(base, 3, 2, 0.2)
        .unwrap()
        .scale_values();
    let mse_scaled = Entropy::new_multiscale(scaled, 3, 2, 0.2)
        .unwrap()
        .scale_values();

    for (a, b) in mse_base.iter().zip(mse_scaled.iter()) {
        match (a.is_finite(), b.is_finite()) {
            (true, true) => assert_abs_diff_eq!(*a, *b, epsilon = 1e-9),
            (fa, fb) => assert_eq!(fa, fb),
        }
    }
}

#[test]
fn invalid_parameters_are_rejected() {
    let data = array![1.0, 2.0, 3.0, 4.0];
    assert!(matches!(
        Entropy::new_multiscale(data.clone(), 0, 2, 0.2),
        Err(EstimatorError::InvalidScaleRange { scale_range: 0 })
    ));
    assert!(matches!(
        Entropy::new_multiscale(data.clone(), 2, 0, 0.2),
        Err(EstimatorError::InvalidEmbeddingDimension { m: 0 })
    ));
    assert!(matches!(
        Entropy::new_multiscale(data, 2, 2, -0.2),
        Err(EstimatorError::InvalidTolerance { .. })
    ));
}
