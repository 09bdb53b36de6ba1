use textropy::analysis::{AlgorithmKind, analyze};
use textropy::encoding::EncodingScheme;

fn main() {
    env_logger::init();

    let text = "\
- Entropy analysis turns a string into numeric sequences and scores them.
- Different encodings expose different structure in the same text.
- Different estimators score different notions of unpredictability.
- Together they form a small matrix of views onto one input.";

    println!("textropy version: {}", textropy::version());
    println!("Analyzing text entropy of {} characters.", text.chars().count());

    // Default request: Frequency encoding against the validated algorithms
    let response = analyze(text, None, None).expect("analysis failed");
    let json = response.to_json().expect("serialization failed");
    println!("{}", serde_json::to_string_pretty(&json).unwrap());

    // Wider request: every encoding, two cheap algorithms
    let response = analyze(
        text,
        Some(&EncodingScheme::ALL),
        Some(&[AlgorithmKind::Shannon, AlgorithmKind::Permutation]),
    )
    .expect("analysis failed");

    println!("\nPer-encoding view:");
    for result in &response.results {
        println!(
            "  {:<10} {:<20} {:.6}",
            result.encoding.to_string(),
            result.algorithm.to_string(),
            result.entropy
        );
    }
}
