//! The stopping evaluator: tracks maximum separations and decides when the
//! outer loop halts.

use tracing::debug;

/// Run state of the stopping evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopState {
    /// Separation is still improving enough to justify another cluster.
    Running,
    /// The newest maximum separation is not far enough relative to the
    /// previous round; the loop halts.
    Converged,
    /// The input cannot produce a clustering (fewer than two patterns make
    /// the maximin distance undefined). Fatal and detected up front.
    Failed,
}

/// Tracks the maximum separation of each round and decides when to halt.
///
/// The evaluator owns the separation history `M[1..=t]`. The bootstrap
/// records `M[1]`; each later round appends `M[t]` and compares the division
/// ratio `M[t] / M[t-1]` against the sensitivity threshold. A zero previous
/// maximum has no meaningful ratio and converges outright.
#[derive(Debug, Clone)]
pub struct StopEvaluator {
    sensitivity: f64,
    history: Vec<f64>,
    state: StopState,
}

impl StopEvaluator {
    /// Create an evaluator for a run over `pattern_count` patterns.
    pub fn new(sensitivity: f64, pattern_count: usize) -> Self {
        let state = if pattern_count < 2 {
            StopState::Failed
        } else {
            StopState::Running
        };
        Self {
            sensitivity,
            history: Vec::new(),
            state,
        }
    }

    /// Record the bootstrap separation `M[1]`.
    ///
    /// A zero bootstrap maximum means every pattern coincides with the
    /// first seed; further splitting is degenerate, so the run converges
    /// immediately.
    pub fn record_bootstrap(&mut self, m1: f64) -> StopState {
        self.history.push(m1);
        if m1 == 0.0 {
            self.state = StopState::Converged;
        }
        self.state
    }

    /// Record the round maximum `M[t]` and evaluate the division ratio.
    ///
    /// # Panics
    /// If called before [`record_bootstrap`](Self::record_bootstrap).
    pub fn evaluate(&mut self, mt: f64) -> StopState {
        assert!(
            !self.history.is_empty(),
            "bootstrap separation must be recorded first"
        );
        let previous = self.history[self.history.len() - 1];
        self.history.push(mt);

        self.state = if previous == 0.0 {
            debug!(m_previous = previous, "degenerate separation, converging");
            StopState::Converged
        } else {
            let ratio = mt / previous;
            debug!(
                m_current = mt,
                m_previous = previous,
                ratio,
                threshold = self.sensitivity,
                "division ratio"
            );
            if ratio < self.sensitivity {
                StopState::Converged
            } else {
                StopState::Running
            }
        };
        self.state
    }

    /// Current state.
    pub fn state(&self) -> StopState {
        self.state
    }

    /// Maximum separation per round, `M[1..=t]`.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Consume the evaluator, returning the separation history.
    pub fn into_history(self) -> Vec<f64> {
        self.history
    }
}
