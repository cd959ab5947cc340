//! Typed identifiers for the three index spaces of the algorithm.
//!
//! Pattern index, cluster identifier, and seed position are distinct
//! concepts and get distinct types. The only sanctioned conversion is
//! `SeedOrdinal` → `ClusterId` at the output boundary: the cluster anchored
//! by the i-th seed is published as cluster `i + 1`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable index of a pattern in its [`PatternStore`](crate::PatternStore).
///
/// Assigned once at load time, in load order. Pattern identity is always
/// this index, never feature-value equality (duplicate values are legal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PatternId(pub usize);

/// Public identifier of a cluster in a final [`Clustering`](crate::Clustering).
///
/// Small positive integers starting at 1. Ids of clusters that end up empty
/// are omitted from results, not reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClusterId(pub usize);

/// Position of a seed in the seed sequence (0-based).
///
/// Each ordinal anchors exactly one working cluster; the distance table row
/// for ordinal `i` holds distances to seed `T[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeedOrdinal(pub usize);

impl From<SeedOrdinal> for ClusterId {
    fn from(ordinal: SeedOrdinal) -> Self {
        ClusterId(ordinal.0 + 1)
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SeedOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
