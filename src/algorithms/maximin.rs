//! The maximin driver: the strict-sequence outer loop tying seed selection,
//! assignment, and the stopping rule together.

use tracing::debug;

use crate::algorithms::assignment::{assign_all, cluster_maxima, DistanceTable};
use crate::algorithms::seeding::{farthest_pattern, initial_seed, next_seed, SeedSet};
use crate::algorithms::stopping::{StopEvaluator, StopState};
use crate::core::cluster::{Clustering, Membership};
use crate::core::config::{MaximinConfig, StopRule};
use crate::core::distance_metric::DistanceMetric;
use crate::core::ids::{PatternId, SeedOrdinal};
use crate::core::pattern::PatternStore;
use crate::error::MaximinError;

/// Run maximin clustering over a pattern store.
///
/// Clusters are seeded farthest-first: the bootstrap seed anchors the first
/// cluster, the globally farthest pattern anchors the second, and each
/// round thereafter promotes the pattern farthest from its own cluster's
/// seed. After every seed addition the full distance table is rebuilt and
/// every pattern is reassigned to its nearest seed. The loop halts once the
/// ratio of successive maximum separations drops below the configured
/// sensitivity.
///
/// Each invocation owns its working state; the function is deterministic
/// for a given store and configuration.
///
/// # Errors
/// [`MaximinError::InvalidConfiguration`] for a sensitivity outside (0, 1]
/// or an out-of-range bootstrap seed index;
/// [`MaximinError::InvalidInput`] for a store with fewer than two patterns.
pub fn maximin<M: DistanceMetric>(
    store: &PatternStore,
    config: &MaximinConfig,
) -> Result<Clustering, MaximinError> {
    config.validate()?;
    if config.initial_seed >= store.len() {
        return Err(MaximinError::invalid_configuration(format!(
            "initial seed index {} out of range for {} patterns",
            config.initial_seed,
            store.len()
        )));
    }

    let mut evaluator = StopEvaluator::new(config.sensitivity, store.len());
    if evaluator.state() == StopState::Failed {
        return Err(MaximinError::invalid_input(format!(
            "clustering requires at least 2 patterns, got {}",
            store.len()
        )));
    }

    let first = initial_seed(config);
    let mut seeds = SeedSet::bootstrap(first);

    // Bootstrap: the globally farthest pattern from the first seed defines
    // the second cluster and M[1].
    let (second, m1) = farthest_pattern::<M>(store, first);
    debug!(
        seed = first.0,
        farthest = second.0,
        separation = m1,
        "bootstrap"
    );

    if evaluator.record_bootstrap(m1) == StopState::Converged {
        // Every pattern coincides with the bootstrap seed: one cluster.
        let membership = single_cluster_membership(store.len());
        return Ok(Clustering::from_membership(
            &membership,
            seeds.as_slice(),
            evaluator.into_history(),
        ));
    }
    seeds.push(second);

    let mut membership = Membership::new(store.len());
    // The clustering of the previous round, kept only for DiscardFinal.
    // Before the first assignment round it is the bootstrap state: one
    // cluster holding every pattern.
    let mut previous = single_cluster_membership(store.len());
    let mut previous_seed_count = 1;

    loop {
        let table = DistanceTable::build::<M>(store, &seeds);
        assign_all(&table, &mut membership);
        debug_assert!(membership.is_complete());

        let maxima = cluster_maxima(&table, &membership);
        let candidate = match next_seed(&maxima) {
            Some(candidate) => candidate,
            None => unreachable!("membership is complete after assignment"),
        };

        let state = evaluator.evaluate(candidate.distance);
        debug!(
            clusters = seeds.len(),
            candidate = candidate.pattern.0,
            max_separation = candidate.distance,
            state = ?state,
            "maximin round"
        );

        match state {
            StopState::Running => {
                if config.stop_rule == StopRule::DiscardFinal {
                    previous = membership.clone();
                    previous_seed_count = seeds.len();
                }
                seeds.push(candidate.pattern);
            }
            StopState::Converged => {
                let (final_membership, seed_count) = match config.stop_rule {
                    StopRule::KeepFinal => (membership, seeds.len()),
                    StopRule::DiscardFinal => (previous, previous_seed_count),
                };
                debug!(
                    clusters = seed_count,
                    rounds = evaluator.history().len(),
                    "converged"
                );
                return Ok(Clustering::from_membership(
                    &final_membership,
                    &seeds.as_slice()[..seed_count],
                    evaluator.into_history(),
                ));
            }
            StopState::Failed => unreachable!("failure is detected before the loop"),
        }
    }
}

/// Membership with every pattern in the bootstrap seed's cluster.
fn single_cluster_membership(pattern_count: usize) -> Membership {
    let mut membership = Membership::new(pattern_count);
    for k in 0..pattern_count {
        membership.assign(PatternId(k), SeedOrdinal(0));
    }
    membership
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::ClusterId;
    use crate::core::pattern::Pattern;
    use crate::metrics::euclidean::Euclidean;

    fn scalar_store(values: &[f64]) -> PatternStore {
        let patterns = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Pattern::scalar(format!("p{}", i + 1), v))
            .collect();
        PatternStore::from_patterns(patterns).unwrap()
    }

    #[test]
    fn test_two_cluster_split() {
        // The classic worked example: extremes 5 and 60 seed the clusters,
        // the 15/50 gap is not wide enough for a third.
        let store = scalar_store(&[5.0, 10.0, 15.0, 50.0, 60.0]);
        let clustering = maximin::<Euclidean>(&store, &MaximinConfig::new()).unwrap();

        assert_eq!(clustering.len(), 2);
        assert_eq!(
            clustering.clusters[0].members,
            vec![PatternId(0), PatternId(1), PatternId(2)]
        );
        assert_eq!(
            clustering.clusters[1].members,
            vec![PatternId(3), PatternId(4)]
        );
        assert_eq!(clustering.clusters[0].seed, PatternId(0));
        assert_eq!(clustering.clusters[1].seed, PatternId(4));
        assert_eq!(clustering.separation_history, vec![55.0, 10.0]);
    }

    #[test]
    fn test_identical_patterns_converge_to_single_cluster() {
        let store = scalar_store(&[7.0, 7.0, 7.0, 7.0, 7.0]);
        let clustering = maximin::<Euclidean>(&store, &MaximinConfig::new()).unwrap();

        assert_eq!(clustering.len(), 1);
        assert_eq!(clustering.clusters[0].id, ClusterId(1));
        assert_eq!(clustering.clusters[0].members.len(), 5);
        assert_eq!(clustering.separation_history, vec![0.0]);
    }

    #[test]
    fn test_two_patterns_become_singletons() {
        let store = scalar_store(&[1.0, 100.0]);
        let clustering = maximin::<Euclidean>(&store, &MaximinConfig::new()).unwrap();

        assert_eq!(clustering.len(), 2);
        assert_eq!(clustering.clusters[0].members, vec![PatternId(0)]);
        assert_eq!(clustering.clusters[1].members, vec![PatternId(1)]);
        assert_eq!(clustering.separation_history, vec![99.0, 0.0]);
    }

    #[test]
    fn test_undersized_store_is_invalid_input() {
        let store = scalar_store(&[42.0]);
        let err = maximin::<Euclidean>(&store, &MaximinConfig::new()).unwrap_err();
        assert!(matches!(err, MaximinError::InvalidInput { .. }));
    }

    #[test]
    fn test_out_of_range_initial_seed_is_invalid_configuration() {
        let store = scalar_store(&[1.0, 2.0, 3.0]);
        let mut config = MaximinConfig::new();
        config.initial_seed = 3;
        let err = maximin::<Euclidean>(&store, &config).unwrap_err();
        assert!(matches!(err, MaximinError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_initial_seed_override() {
        // Bootstrapping from 50 instead of 5 flips which extreme anchors
        // cluster 1 but yields the same two groups.
        let store = scalar_store(&[5.0, 10.0, 15.0, 50.0, 60.0]);
        let mut config = MaximinConfig::new();
        config.initial_seed = 3;
        let clustering = maximin::<Euclidean>(&store, &config).unwrap();

        assert_eq!(clustering.len(), 2);
        assert_eq!(
            clustering.clusters[0].members,
            vec![PatternId(3), PatternId(4)]
        );
        assert_eq!(
            clustering.clusters[1].members,
            vec![PatternId(0), PatternId(1), PatternId(2)]
        );
        assert_eq!(clustering.separation_history, vec![45.0, 10.0]);
    }

    #[test]
    fn test_finer_sensitivity_splits_further() {
        // At 0.15, the 10/55 bootstrap ratio survives and the run keeps
        // splitting until every pattern anchors its own cluster.
        let store = scalar_store(&[5.0, 10.0, 15.0, 50.0, 60.0]);
        let mut config = MaximinConfig::new();
        config.sensitivity = 0.15;
        let clustering = maximin::<Euclidean>(&store, &config).unwrap();

        assert_eq!(clustering.len(), 5);
        for cluster in &clustering.clusters {
            assert_eq!(cluster.members, vec![cluster.seed]);
        }
        assert_eq!(
            clustering.separation_history,
            vec![55.0, 10.0, 10.0, 5.0, 0.0]
        );
    }

    #[test]
    fn test_discard_final_rolls_back_one_round() {
        let store = scalar_store(&[5.0, 10.0, 15.0, 50.0, 60.0]);

        let mut config = MaximinConfig::new();
        config.sensitivity = 0.15;
        config.stop_rule = StopRule::DiscardFinal;
        let clustering = maximin::<Euclidean>(&store, &config).unwrap();

        // KeepFinal yields five singletons; rolling back gives the
        // four-cluster round where 5 and 10 still share a cluster.
        assert_eq!(clustering.len(), 4);
        assert_eq!(
            clustering.clusters[0].members,
            vec![PatternId(0), PatternId(1)]
        );
    }

    #[test]
    fn test_discard_final_on_first_round_is_bootstrap_cluster() {
        let store = scalar_store(&[5.0, 10.0, 15.0, 50.0, 60.0]);
        let mut config = MaximinConfig::new();
        config.stop_rule = StopRule::DiscardFinal;
        let clustering = maximin::<Euclidean>(&store, &config).unwrap();

        assert_eq!(clustering.len(), 1);
        assert_eq!(clustering.clusters[0].members.len(), 5);
    }

    #[test]
    fn test_seed_sequence_never_repeats() {
        let store = scalar_store(&[0.0, 1.0, 3.0, 9.0, 27.0, 81.0]);
        let mut config = MaximinConfig::new();
        config.sensitivity = 1.0;
        let clustering = maximin::<Euclidean>(&store, &config).unwrap();

        let mut seeds: Vec<PatternId> =
            clustering.clusters.iter().map(|c| c.seed).collect();
        let before = seeds.len();
        seeds.sort();
        seeds.dedup();
        assert_eq!(seeds.len(), before, "a pattern may anchor at most one cluster");
        assert!(clustering.len() <= store.len());
    }
}
