//! Matcher service - inbound handlers plus tick evaluation.

use crate::domain::{find_pair, MatcherState, Solution};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Matcher configuration.
#[derive(Clone, Debug)]
pub struct MatcherConfig {
    /// Period of the search-and-publish tick.
    pub tick_interval: Duration,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
        }
    }
}

/// The SolutionMatcher service.
///
/// Inbound handlers mutate the owned state; [`evaluate`](Self::evaluate)
/// only reads it. The runtime drives all three from a single task, so
/// handlers and ticks never interleave; the lock exists so tests and
/// embedders can drive the service directly from elsewhere.
pub struct MatcherService {
    config: MatcherConfig,
    state: Arc<RwLock<MatcherState>>,
}

impl MatcherService {
    /// Create a new matcher service.
    #[must_use]
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            state: Arc::new(RwLock::new(MatcherState::new())),
        }
    }

    /// Handle an `/input` message: replace the stored array.
    ///
    /// No validation; any sequence is accepted, including empty ones.
    pub fn handle_input(&self, values: Vec<i8>) {
        let len = values.len();
        self.state.write().apply_input(values);
        debug!(len, "Search array replaced");
    }

    /// Handle a `/target` message: replace the stored target.
    pub fn handle_target(&self, target: i8) {
        self.state.write().apply_target(target);
        debug!(target, "Target replaced");
    }

    /// Evaluate one tick.
    ///
    /// Returns the first matching pair for the current (array, target),
    /// or `None` when either input is still missing or no pair sums to
    /// the target. Never mutates state: flags stay set and the same
    /// solution is re-produced on every tick until an input changes.
    #[must_use]
    pub fn evaluate(&self) -> Option<Solution> {
        let state = self.state.read();
        if !state.is_ready() {
            return None;
        }
        let target = state.target()?;
        find_pair(state.values(), target).map(|(i, j)| Solution::from_indices(i, j))
    }

    /// Both inputs have arrived at least once.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state.read().is_ready()
    }

    /// The configured tick period.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval
    }
}
