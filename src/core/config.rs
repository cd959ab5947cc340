//! Run configuration.

use crate::error::MaximinError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default sensitivity threshold for the stopping rule.
pub const DEFAULT_SENSITIVITY: f64 = 0.3;

/// Which clustering to return when the stop condition fires.
///
/// The stopping test compares the newest maximum separation against the
/// previous round's; the two rules differ in whether the round that failed
/// the test is part of the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StopRule {
    /// Keep the clusters produced by the round that triggered the stop.
    /// This is the historical behavior of the algorithm.
    #[default]
    KeepFinal,
    /// Roll back to the previous round's clusters. If the very first
    /// assignment round triggers the stop, this is the bootstrap state:
    /// a single cluster holding every pattern.
    DiscardFinal,
}

/// Configuration for a maximin run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaximinConfig {
    /// Stopping threshold: the run converges once the ratio of successive
    /// maximum separations drops below this value. Must lie in (0, 1].
    pub sensitivity: f64,
    /// Index of the bootstrap seed pattern. Pattern 0 by default; any
    /// in-range index is valid and the choice is part of the run's
    /// deterministic contract.
    pub initial_seed: usize,
    /// Which round's clusters to return on convergence, see [`StopRule`].
    pub stop_rule: StopRule,
}

impl MaximinConfig {
    /// Create a configuration with the default sensitivity (0.3), bootstrap
    /// seed 0, and [`StopRule::KeepFinal`].
    pub fn new() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            initial_seed: 0,
            stop_rule: StopRule::KeepFinal,
        }
    }

    /// Check the intrinsic parameter ranges.
    ///
    /// The bootstrap seed index is validated against the pattern store at
    /// run time, not here.
    ///
    /// # Errors
    /// [`MaximinError::InvalidConfiguration`] if the sensitivity is not a
    /// finite number in (0, 1].
    pub fn validate(&self) -> Result<(), MaximinError> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 || self.sensitivity > 1.0 {
            return Err(MaximinError::invalid_configuration(format!(
                "sensitivity must lie in (0, 1], got {}",
                self.sensitivity
            )));
        }
        Ok(())
    }
}

impl Default for MaximinConfig {
    fn default() -> Self {
        Self::new()
    }
}
