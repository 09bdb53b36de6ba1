use ndarray::Array1;
use std::collections::HashMap;
use textropy::encoding::{EncodingScheme, encode};
use textropy::estimators::entropy::Entropy;
use textropy::estimators::traits::{GlobalValue, LocalValues, ScaleValues};

fn main() {
    let text = "abracadabra";
    let data = encode(text, EncodingScheme::Ordinal);
    println!("Ordinal encoding of {text:?}: {data:?}");

    // Calculate Shannon entropy manually to verify
    let mut counts = HashMap::new();
    for &value in &data {
        *counts.entry(value.to_bits()).or_insert(0usize) += 1;
    }
    let n = data.len() as f64;
    let mut manual_entropy = 0.0;
    for (_, &count) in counts.iter() {
        let p = count as f64 / n;
        manual_entropy -= p * p.log2();
    }

    let shannon = Entropy::new_shannon(data.clone());
    println!("Manual Shannon calculation: {manual_entropy}");
    println!("Library Shannon value:      {}", shannon.global_value());
    println!("Per-sample surprisal:       {:?}", shannon.local_values());

    // Windowed regularity estimators with the conventional tolerance
    let std = textropy::estimators::approaches::embedding::sample_std(&data);
    let apen = Entropy::new_approximate(data.clone(), 2, 0.2 * std)
        .unwrap()
        .global_value();
    let sampen = Entropy::new_sample(data.clone(), 2, 0.2 * std)
        .unwrap()
        .global_value();
    println!("Approximate entropy (m=2):  {apen}");
    println!("Sample entropy (m=2):       {sampen}");

    // Ordinal patterns
    let pe = Entropy::new_permutation(data.clone(), 3).unwrap();
    println!(
        "Permutation entropy (order 3, {} windows): {}",
        pe.window_count(),
        pe.global_value()
    );

    // Multiscale entropy is vector-valued: one value per scale
    let long: Array1<f64> = (0..200).map(|i| ((i * 13) % 17) as f64).collect();
    let mse = Entropy::new_multiscale(long, 5, 2, 0.2).unwrap();
    println!("Multiscale entropy (scales 1..=5): {:?}", mse.scale_values());
}
