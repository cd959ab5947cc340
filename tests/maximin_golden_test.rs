use std::collections::BTreeMap;
use std::fs;

use maximin_rs::{cluster, ClusterId, Pattern};
use serde::Deserialize;

#[derive(Deserialize)]
struct GoldenCase {
    names: Vec<String>,
    values: Vec<Vec<f64>>,
    sensitivity: f64,
    /// Cluster id (stringified, JSON keys are strings) → member names.
    expected: BTreeMap<String, Vec<String>>,
}

fn load_golden(filename: &str) -> GoldenCase {
    let path = format!("tests/golden_data/{filename}");
    let data = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Golden data file not found: {path}"));
    serde_json::from_str(&data).unwrap()
}

fn run_golden_case(filename: &str) {
    let case = load_golden(filename);
    eprintln!(
        "Testing {filename}: {} patterns, sensitivity {}",
        case.names.len(),
        case.sensitivity
    );

    let patterns: Vec<Pattern> = case
        .names
        .iter()
        .zip(&case.values)
        .map(|(name, value)| Pattern::new(name.clone(), value.clone()))
        .collect();

    let classes = cluster(&patterns, case.sensitivity).unwrap();

    let expected: BTreeMap<ClusterId, Vec<String>> = case
        .expected
        .iter()
        .map(|(id, names)| (ClusterId(id.parse().unwrap()), names.clone()))
        .collect();

    assert_eq!(classes, expected, "{filename}: clustering mismatch");
    eprintln!("  {filename}: {} clusters, as expected", classes.len());
}

#[test]
fn golden_scalar_two_clusters() {
    run_golden_case("scalar_two_clusters.json");
}

#[test]
fn golden_vector_three_clusters() {
    run_golden_case("vector_three_clusters.json");
}
