//! Plugging a user-defined distance metric into the maximin engine.
//!
//! Implements the Chebyshev (L∞) distance and clusters 2-D points with it.
//!
//! Run with: cargo run --example custom_metric

use maximin_rs::{DistanceMetric, Maximin, MaximinConfig, Pattern, PatternStore};

/// Chebyshev distance: the largest per-feature deviation.
#[derive(Debug, Clone)]
struct Chebyshev;

impl DistanceMetric for Chebyshev {
    fn distance(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max)
    }
}

fn main() {
    let store = PatternStore::from_patterns(vec![
        Pattern::new("origin-a", vec![0.0, 0.0]),
        Pattern::new("origin-b", vec![1.0, 0.5]),
        Pattern::new("far-a", vec![40.0, 38.0]),
        Pattern::new("far-b", vec![41.0, 40.0]),
        Pattern::new("mid", vec![20.0, 21.0]),
    ])
    .unwrap();

    let engine = Maximin::<Chebyshev>::new(MaximinConfig::new());
    let clustering = engine.cluster(&store).unwrap();

    for cluster in &clustering.clusters {
        let members: Vec<&str> = cluster
            .members
            .iter()
            .map(|&member| store.name_of(member))
            .collect();
        println!(
            "class {} (seeded by {}): {members:?}",
            cluster.id,
            store.name_of(cluster.seed)
        );
    }
}
