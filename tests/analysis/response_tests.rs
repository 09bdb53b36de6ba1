use textropy::analysis::{AlgorithmKind, EntropyResponse, EntropyResult, analyze};
use textropy::encoding::EncodingScheme;

#[test]
fn json_document_carries_one_object_per_result() {
    let response = analyze("banana", None, None).unwrap();
    let json = response.to_json().unwrap();

    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    for entry in results {
        assert!(entry["encoding"].is_string());
        assert!(entry["algorithm"].is_string());
        assert!(entry["entropy"].is_number());
    }
    assert_eq!(results[0]["encoding"], "frequency");
    assert_eq!(results[0]["algorithm"], "shannon_entropy");
}

#[test]
fn algorithm_wire_names_are_stable() {
    let expected = [
        (AlgorithmKind::Shannon, "shannon_entropy"),
        (AlgorithmKind::Approximate, "approximate_entropy"),
        (AlgorithmKind::Sample, "sample_entropy"),
        (AlgorithmKind::Permutation, "permutation_entropy"),
        (AlgorithmKind::Multiscale, "multiscale_entropy"),
    ];
    for (kind, name) in expected {
        assert_eq!(kind.as_str(), name);
        assert_eq!(serde_json::to_value(kind).unwrap(), serde_json::json!(name));
        assert_eq!(kind.to_string(), name);
    }
}

#[test]
fn result_records_serialize_with_canonical_field_names() {
    let result = EntropyResult {
        encoding: EncodingScheme::OneHot,
        algorithm: AlgorithmKind::Permutation,
        entropy: 1.5,
    };
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "encoding": "one_hot",
            "algorithm": "permutation_entropy",
            "entropy": 1.5,
        })
    );
}

#[test]
fn response_preserves_result_order_in_json() {
    let response = analyze(
        "ordered output",
        Some(&[EncodingScheme::Ordinal, EncodingScheme::Frequency]),
        Some(&[AlgorithmKind::Shannon, AlgorithmKind::Permutation]),
    )
    .unwrap();
    let json = response.to_json().unwrap();
    let results = json["results"].as_array().unwrap();

    let pairs: Vec<(String, String)> = results
        .iter()
        .map(|r| {
            (
                r["encoding"].as_str().unwrap().to_string(),
                r["algorithm"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("ordinal".into(), "shannon_entropy".into()),
            ("ordinal".into(), "permutation_entropy".into()),
            ("frequency".into(), "shannon_entropy".into()),
            ("frequency".into(), "permutation_entropy".into()),
        ]
    );
}

#[test]
fn responses_with_equal_results_compare_equal() {
    let a = analyze("same text", None, None).unwrap();
    let b = analyze("same text", None, None).unwrap();
    assert_eq!(a, b);

    let manual = EntropyResponse {
        results: a.results.clone(),
    };
    assert_eq!(a, manual);
}
