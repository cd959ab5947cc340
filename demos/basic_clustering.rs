//! Basic maximin clustering over scalar patterns.
//!
//! Seeds clusters farthest-first and stops once the separation ratio drops
//! below the sensitivity threshold. Set `RUST_LOG=debug` to watch the
//! per-round decisions.
//!
//! Run with: cargo run --example basic_clustering

use maximin_rs::{EuclideanMaximin, MaximinConfig, Pattern, PatternStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let store = PatternStore::from_patterns(vec![
        Pattern::scalar("pattern1", 5.0),
        Pattern::scalar("pattern2", 10.0),
        Pattern::scalar("pattern3", 15.0),
        Pattern::scalar("pattern4", 50.0),
        Pattern::scalar("pattern5", 60.0),
    ])
    .unwrap();

    let engine = EuclideanMaximin::new(MaximinConfig::new());
    let clustering = engine.cluster(&store).unwrap();

    println!("Patterns: {}", store.len());
    println!("Clusters: {}", clustering.len());

    for (id, names) in clustering.named(&store) {
        println!("  class {id}: {names:?}");
    }

    // The separation history shows why the loop stopped: the last maximum
    // is small relative to the one before it.
    println!("Separation history: {:?}", clustering.separation_history);
}
