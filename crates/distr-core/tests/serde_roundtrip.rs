use distr_core::{select, Bin, Distribution, DistributionSummary};
use serde_json::json;

fn sample() -> Distribution {
    Distribution::new(
        "Zhadronic",
        "e-p+",
        2,
        2,
        vec![
            Bin::new(vec![-0.9, 10.0], 12.5),
            Bin::new(vec![0.9, 10.0], 7.5),
        ],
    )
    .expect("valid")
}

#[test]
fn distribution_roundtrips_through_json() {
    let distr = sample();
    let json = serde_json::to_string(&distr).expect("serialize");
    let back: Distribution = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, distr);
}

#[test]
fn deserialization_enforces_bin_count() {
    let payload = json!({
        "name": "broken",
        "pol_config": "e-p-",
        "dim": 1,
        "n_bins": 2,
        "bins": [{ "centers": [0.0], "value": 1.0 }]
    });
    let err = serde_json::from_value::<Distribution>(payload).unwrap_err();
    assert!(err.to_string().contains("bin_count_mismatch"));
}

#[test]
fn summary_and_selection() {
    let other = Distribution::new("Zleptonic", "e-p+", 1, 0, Vec::new()).expect("valid");
    let distrs = vec![sample(), other];

    let hits = select(&distrs, Some("Zhadronic"), None);
    assert_eq!(hits.len(), 1);
    assert_eq!(select(&distrs, None, Some("e-p+")).len(), 2);
    assert!(select(&distrs, Some("Zhadronic"), Some("e+p-")).is_empty());

    let summary = DistributionSummary::from_distribution(hits[0], 10.0);
    assert_eq!(summary.n_bins, 2);
    assert_eq!(summary.dim, 2);
    assert_eq!(summary.integral, 12.5);
}
