//! The assignment engine: the seed-to-pattern distance table, nearest-seed
//! assignment, and per-cluster maxima.

use crate::algorithms::seeding::SeedSet;
use crate::core::cluster::Membership;
use crate::core::distance_metric::DistanceMetric;
use crate::core::ids::{PatternId, SeedOrdinal};
use crate::core::pattern::PatternStore;

/// Seed-to-pattern distance table, rebuilt in full after every seed addition.
///
/// Row `i` holds the distance from every pattern to seed `T[i]`; a seed is
/// always at distance 0 from itself.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    rows: Vec<Vec<f64>>,
}

impl DistanceTable {
    /// Compute `D[i][k] = metric(value(T[i]), value(k))` for every seed `i`
    /// and pattern `k`. O(seeds × patterns) metric evaluations.
    pub fn build<M: DistanceMetric>(store: &PatternStore, seeds: &SeedSet) -> Self {
        let rows = seeds
            .as_slice()
            .iter()
            .map(|&seed| {
                let seed_value = store.value_of(seed);
                store
                    .ids()
                    .map(|k| M::distance(seed_value, store.value_of(k)))
                    .collect::<Vec<f64>>()
            })
            .collect::<Vec<_>>();

        let table = Self { rows };
        for (i, &seed) in seeds.as_slice().iter().enumerate() {
            debug_assert_eq!(
                table.rows[i][seed.0], 0.0,
                "a seed must be at distance zero from itself"
            );
        }
        table
    }

    /// Distance from a pattern to the seed anchoring the given cluster.
    pub fn distance(&self, cluster: SeedOrdinal, pattern: PatternId) -> f64 {
        self.rows[cluster.0][pattern.0]
    }

    /// Number of seed rows.
    pub fn seed_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of pattern columns.
    pub fn pattern_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}

/// Assign every pattern to its nearest seed's cluster.
///
/// Ties break toward the lowest seed ordinal. Patterns already assigned
/// elsewhere are moved, so membership remains a partition after every call.
/// Rerun in full after each seed addition; a new seed can only pull
/// patterns toward itself, never push one away from a closer existing seed.
pub fn assign_all(table: &DistanceTable, membership: &mut Membership) {
    for k in 0..table.pattern_count() {
        let pattern = PatternId(k);
        let mut nearest = SeedOrdinal(0);
        let mut nearest_distance = table.distance(nearest, pattern);
        for i in 1..table.seed_count() {
            let ordinal = SeedOrdinal(i);
            let d = table.distance(ordinal, pattern);
            if d < nearest_distance {
                nearest = ordinal;
                nearest_distance = d;
            }
        }
        membership.assign(pattern, nearest);
    }
}

/// Farthest member of one cluster, with its distance to the cluster's seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterMax {
    /// The farthest member pattern.
    pub pattern: PatternId,
    /// Its distance to the cluster's seed.
    pub distance: f64,
}

/// Per-cluster maxima: for each seed ordinal, the farthest member and its
/// distance.
///
/// A cluster with no members yields `None` and is simply excluded from any
/// overall maximum, never treated as zero and never an error. A singleton
/// cluster legitimately yields its seed at distance 0. Within a cluster,
/// ties break toward the lowest pattern index.
pub fn cluster_maxima(table: &DistanceTable, membership: &Membership) -> Vec<Option<ClusterMax>> {
    let mut maxima: Vec<Option<ClusterMax>> = vec![None; table.seed_count()];
    for k in 0..membership.len() {
        let pattern = PatternId(k);
        if let Some(cluster) = membership.cluster_of(pattern) {
            let distance = table.distance(cluster, pattern);
            let slot = &mut maxima[cluster.0];
            let better = match slot {
                None => true,
                Some(current) => distance > current.distance,
            };
            if better {
                *slot = Some(ClusterMax { pattern, distance });
            }
        }
    }
    maxima
}
