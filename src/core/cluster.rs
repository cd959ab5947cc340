//! Cluster membership and the final clustering result.

use std::collections::BTreeMap;

use crate::core::ids::{ClusterId, PatternId, SeedOrdinal};
use crate::core::pattern::PatternStore;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Working cluster membership: which cluster each pattern currently belongs to.
///
/// Exactly one assignment slot per pattern, so membership is a partition by
/// construction: a pattern can never appear in two clusters. Reassignment
/// overwrites the slot, which removes the pattern from its previous cluster
/// and adds it to the new one in a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    assigned: Vec<Option<SeedOrdinal>>,
}

impl Membership {
    /// Create a membership with every pattern unassigned.
    pub fn new(pattern_count: usize) -> Self {
        Self {
            assigned: vec![None; pattern_count],
        }
    }

    /// Assign a pattern to a cluster, reassigning if it is already a member
    /// of another cluster.
    pub fn assign(&mut self, pattern: PatternId, cluster: SeedOrdinal) {
        self.assigned[pattern.0] = Some(cluster);
    }

    /// Cluster the pattern currently belongs to, if any.
    pub fn cluster_of(&self, pattern: PatternId) -> Option<SeedOrdinal> {
        self.assigned[pattern.0]
    }

    /// Members of a cluster, in ascending pattern order.
    pub fn members(&self, cluster: SeedOrdinal) -> Vec<PatternId> {
        self.assigned
            .iter()
            .enumerate()
            .filter(|(_, assigned)| **assigned == Some(cluster))
            .map(|(k, _)| PatternId(k))
            .collect()
    }

    /// Number of pattern slots.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Whether the membership tracks no patterns.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// True once every pattern is assigned to some cluster.
    pub fn is_complete(&self) -> bool {
        self.assigned.iter().all(|assigned| assigned.is_some())
    }
}

/// One cluster of the final result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cluster {
    /// Public cluster identifier (1-based).
    pub id: ClusterId,
    /// The seed pattern anchoring this cluster.
    pub seed: PatternId,
    /// Member patterns in ascending pattern order. The seed is a member of
    /// its own cluster.
    pub members: Vec<PatternId>,
}

/// Final, read-only clustering produced by a maximin run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Clustering {
    /// Non-empty clusters in increasing id order. Ids of clusters that
    /// ended up empty are skipped, not reused.
    pub clusters: Vec<Cluster>,
    /// Maximum separation recorded at each step (`M[1..=t]`). The ratio of
    /// the last two entries is what triggered convergence.
    pub separation_history: Vec<f64>,
}

impl Clustering {
    /// Build the result from a membership and the seed sequence, omitting
    /// clusters with no members.
    pub(crate) fn from_membership(
        membership: &Membership,
        seeds: &[PatternId],
        separation_history: Vec<f64>,
    ) -> Self {
        let clusters = seeds
            .iter()
            .enumerate()
            .filter_map(|(i, &seed)| {
                let ordinal = SeedOrdinal(i);
                let members = membership.members(ordinal);
                if members.is_empty() {
                    None
                } else {
                    Some(Cluster {
                        id: ordinal.into(),
                        seed,
                        members,
                    })
                }
            })
            .collect();
        Self {
            clusters,
            separation_history,
        }
    }

    /// Number of (non-empty) clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether the clustering holds no clusters. Never true for a result
    /// returned by the algorithm.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Translate cluster membership back to pattern names.
    ///
    /// Returns cluster id → member names, in increasing cluster-id order
    /// with names in original pattern order.
    pub fn named(&self, store: &PatternStore) -> BTreeMap<ClusterId, Vec<String>> {
        self.clusters
            .iter()
            .map(|cluster| {
                let names = cluster
                    .members
                    .iter()
                    .map(|&member| store.name_of(member).to_string())
                    .collect();
                (cluster.id, names)
            })
            .collect()
    }
}
