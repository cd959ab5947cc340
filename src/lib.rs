//! # maximin-rs
//!
//! Unsupervised pattern clustering with the Maximin algorithm: clusters are
//! seeded farthest-first, every pattern is assigned to its nearest seed, and
//! the loop stops once the marginal separation gained by another cluster
//! falls below a sensitivity threshold.
//!
//! Patterns are named, fixed-length feature vectors. The distance function
//! is pluggable via [`DistanceMetric`]; [`Euclidean`] is the default and,
//! over single-feature patterns, reduces to the absolute difference of the
//! classic scalar formulation. Runs are deterministic: every tie-break is
//! fixed (lowest pattern index for farthest searches, lowest seed ordinal
//! for assignment), so identical inputs always produce identical clusters.
//!
//! ```
//! use maximin_rs::{cluster, Pattern};
//!
//! let patterns = vec![
//!     Pattern::scalar("p1", 5.0),
//!     Pattern::scalar("p2", 10.0),
//!     Pattern::scalar("p3", 15.0),
//!     Pattern::scalar("p4", 50.0),
//!     Pattern::scalar("p5", 60.0),
//! ];
//!
//! let classes = cluster(&patterns, 0.3).unwrap();
//! assert_eq!(classes.len(), 2);
//! ```

pub mod algorithms;
pub mod core;
pub mod error;
pub mod metrics;

use std::collections::BTreeMap;
use std::marker::PhantomData;

pub use crate::algorithms::assignment::{assign_all, cluster_maxima, ClusterMax, DistanceTable};
pub use crate::algorithms::maximin::maximin;
pub use crate::algorithms::seeding::SeedSet;
pub use crate::algorithms::stopping::{StopEvaluator, StopState};
pub use crate::core::cluster::{Cluster, Clustering, Membership};
pub use crate::core::config::{MaximinConfig, StopRule, DEFAULT_SENSITIVITY};
pub use crate::core::distance_metric::DistanceMetric;
pub use crate::core::ids::{ClusterId, PatternId, SeedOrdinal};
pub use crate::core::pattern::{Pattern, PatternStore};
pub use crate::error::MaximinError;
pub use crate::metrics::absolute::Absolute;
pub use crate::metrics::euclidean::Euclidean;

/// High-level facade for maximin clustering, generic over the distance
/// metric.
///
/// # Examples
///
/// ```
/// use maximin_rs::{EuclideanMaximin, MaximinConfig, Pattern, PatternStore};
///
/// let store = PatternStore::from_patterns(vec![
///     Pattern::scalar("a", 1.0),
///     Pattern::scalar("b", 2.0),
///     Pattern::scalar("c", 90.0),
/// ])
/// .unwrap();
///
/// let engine = EuclideanMaximin::new(MaximinConfig::new());
/// let clustering = engine.cluster(&store).unwrap();
/// assert_eq!(clustering.len(), 2);
/// ```
pub struct Maximin<M: DistanceMetric> {
    config: MaximinConfig,
    _metric: PhantomData<M>,
}

impl<M: DistanceMetric> Maximin<M> {
    /// Create a new engine with the given configuration.
    pub fn new(config: MaximinConfig) -> Self {
        Self {
            config,
            _metric: PhantomData,
        }
    }

    /// Cluster every pattern in the store.
    pub fn cluster(&self, store: &PatternStore) -> Result<Clustering, MaximinError> {
        maximin::<M>(store, &self.config)
    }
}

/// Convenience type alias for the default (Euclidean) metric.
pub type EuclideanMaximin = Maximin<Euclidean>;

/// Convenience type alias for the absolute (L1) metric.
pub type AbsoluteMaximin = Maximin<Absolute>;

/// Cluster a list of named patterns and map every cluster back to its
/// member pattern names.
///
/// The single-call entry point: Euclidean distance, default configuration
/// apart from `sensitivity`, cluster ids starting at 1, member names in
/// original pattern order. Configuration is checked before anything is
/// computed.
///
/// # Errors
/// [`MaximinError::InvalidConfiguration`] if `sensitivity` is outside
/// (0, 1]; [`MaximinError::InvalidInput`] if `patterns` is empty, has fewer
/// than two elements, or fails feature validation.
pub fn cluster(
    patterns: &[Pattern],
    sensitivity: f64,
) -> Result<BTreeMap<ClusterId, Vec<String>>, MaximinError> {
    let mut config = MaximinConfig::new();
    config.sensitivity = sensitivity;
    config.validate()?;

    let store = PatternStore::from_patterns(patterns.to_vec())?;
    let clustering = maximin::<Euclidean>(&store, &config)?;
    Ok(clustering.named(&store))
}
