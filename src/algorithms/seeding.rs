//! Seed selection: the bootstrap seed, the global farthest-pattern search,
//! and the per-round maximin step.

use crate::algorithms::assignment::ClusterMax;
use crate::core::config::MaximinConfig;
use crate::core::distance_metric::DistanceMetric;
use crate::core::ids::{PatternId, SeedOrdinal};
use crate::core::pattern::PatternStore;

/// Ordered, grow-only sequence of seed patterns.
///
/// Each entry anchors one cluster; the sequence grows by exactly one seed
/// per round and never repeats a pattern.
#[derive(Debug, Clone)]
pub struct SeedSet {
    seeds: Vec<PatternId>,
}

impl SeedSet {
    /// Start the sequence with the bootstrap seed.
    pub fn bootstrap(seed: PatternId) -> Self {
        Self { seeds: vec![seed] }
    }

    /// Append the next seed. A pattern can anchor at most one cluster.
    pub fn push(&mut self, seed: PatternId) {
        debug_assert!(
            !self.seeds.contains(&seed),
            "pattern {seed} already anchors a cluster"
        );
        self.seeds.push(seed);
    }

    /// Number of seeds chosen so far.
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Whether the sequence is empty. Never true: the sequence is created
    /// with its bootstrap seed.
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Seed pattern at the given ordinal.
    pub fn get(&self, ordinal: SeedOrdinal) -> PatternId {
        self.seeds[ordinal.0]
    }

    /// All seeds in selection order.
    pub fn as_slice(&self) -> &[PatternId] {
        &self.seeds
    }
}

/// The deterministic bootstrap seed: the configured index.
///
/// Pattern 0 unless the configuration says otherwise; never an accident of
/// iteration order.
pub fn initial_seed(config: &MaximinConfig) -> PatternId {
    PatternId(config.initial_seed)
}

/// Global farthest pattern from the bootstrap seed, with its distance.
///
/// Ties break toward the lowest pattern index. When every pattern coincides
/// with the seed the seed itself comes back at distance 0, which the caller
/// treats as immediate convergence.
pub fn farthest_pattern<M: DistanceMetric>(
    store: &PatternStore,
    seed: PatternId,
) -> (PatternId, f64) {
    let seed_value = store.value_of(seed);
    let mut best = (seed, 0.0_f64);
    for k in store.ids() {
        let d = M::distance(seed_value, store.value_of(k));
        if d > best.1 {
            best = (k, d);
        }
    }
    best
}

/// The maximin step: among the per-cluster maxima, the overall farthest
/// pattern from its own cluster's seed.
///
/// Ties break toward the lowest pattern index, across clusters. Returns
/// `None` only when every cluster is empty.
pub fn next_seed(maxima: &[Option<ClusterMax>]) -> Option<ClusterMax> {
    let mut best: Option<ClusterMax> = None;
    for &candidate in maxima.iter().flatten() {
        let better = match best {
            None => true,
            Some(current) => {
                candidate.distance > current.distance
                    || (candidate.distance == current.distance
                        && candidate.pattern < current.pattern)
            }
        };
        if better {
            best = Some(candidate);
        }
    }
    best
}
