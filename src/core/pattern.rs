//! Patterns and the immutable store that holds them.

use crate::core::ids::PatternId;
use crate::error::MaximinError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named, immutable feature vector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pattern {
    /// Human-readable pattern name, reported in the final clustering.
    pub name: String,
    /// Feature values. All patterns in a store share one dimension.
    pub value: Vec<f64>,
}

impl Pattern {
    /// Create a pattern from a name and a feature vector.
    pub fn new(name: impl Into<String>, value: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Create a single-feature pattern (the classic scalar data model).
    pub fn scalar(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, vec![value])
    }
}

/// Immutable, index-addressed collection of patterns.
///
/// Validated once at load and never mutated afterwards. Patterns are
/// identified by [`PatternId`] in load order. Loading guarantees that every
/// feature vector has the same non-zero length and contains only finite
/// values, so distance comparisons downstream are always well defined.
#[derive(Debug, Clone)]
pub struct PatternStore {
    patterns: Vec<Pattern>,
    dimension: usize,
}

impl PatternStore {
    /// Load a list of name/value patterns.
    ///
    /// # Errors
    /// [`MaximinError::InvalidInput`] if the list is empty, the feature
    /// vectors are ragged or zero-length, or any feature is non-finite.
    pub fn from_patterns(patterns: Vec<Pattern>) -> Result<Self, MaximinError> {
        if patterns.is_empty() {
            return Err(MaximinError::invalid_input("pattern set is empty"));
        }
        let dimension = patterns[0].value.len();
        if dimension == 0 {
            return Err(MaximinError::invalid_input(
                "patterns must have at least one feature",
            ));
        }
        for (k, pattern) in patterns.iter().enumerate() {
            if pattern.value.len() != dimension {
                return Err(MaximinError::invalid_input(format!(
                    "pattern {k} ({:?}) has {} features, expected {dimension}",
                    pattern.name,
                    pattern.value.len()
                )));
            }
            if pattern.value.iter().any(|v| !v.is_finite()) {
                return Err(MaximinError::invalid_input(format!(
                    "pattern {k} ({:?}) contains a non-finite feature value",
                    pattern.name
                )));
            }
        }
        Ok(Self {
            patterns,
            dimension,
        })
    }

    /// Load from parallel name and value arrays.
    ///
    /// # Errors
    /// [`MaximinError::InvalidInput`] if the two arrays differ in length, in
    /// addition to the [`from_patterns`](Self::from_patterns) checks.
    pub fn from_parallel(names: Vec<String>, values: Vec<Vec<f64>>) -> Result<Self, MaximinError> {
        if names.len() != values.len() {
            return Err(MaximinError::invalid_input(format!(
                "parallel arrays differ in length: {} names vs {} values",
                names.len(),
                values.len()
            )));
        }
        Self::from_patterns(
            names
                .into_iter()
                .zip(values)
                .map(|(name, value)| Pattern { name, value })
                .collect(),
        )
    }

    /// Load scalar-valued patterns from parallel name and value arrays.
    pub fn from_scalars(names: Vec<String>, values: Vec<f64>) -> Result<Self, MaximinError> {
        Self::from_parallel(names, values.into_iter().map(|v| vec![v]).collect())
    }

    /// Number of patterns (K).
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the store holds no patterns. Never true for a loaded store.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Shared feature-vector length.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Feature vector of a pattern.
    pub fn value_of(&self, id: PatternId) -> &[f64] {
        &self.patterns[id.0].value
    }

    /// Name of a pattern.
    pub fn name_of(&self, id: PatternId) -> &str {
        &self.patterns[id.0].name
    }

    /// All pattern ids in load order.
    pub fn ids(&self) -> impl Iterator<Item = PatternId> + '_ {
        (0..self.patterns.len()).map(PatternId)
    }

    /// Exact-match lookup of a feature vector.
    ///
    /// Returns the first (lowest-index) match when duplicate values exist.
    /// The algorithm itself never derives pattern identity from value
    /// equality; this exists for callers that only hold a value.
    pub fn index_of_value(&self, value: &[f64]) -> Option<PatternId> {
        self.patterns
            .iter()
            .position(|p| p.value == value)
            .map(PatternId)
    }
}
