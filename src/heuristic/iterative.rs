//! Time-boxed iterative deepening over alpha-beta.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::alpha_beta::root_search;
use crate::core::{Evaluator, GameState, Result, Score, SearchError, StateScore, TimeKeeper};
use crate::play::Strategy;

/// Iterative deepening parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepeningConfig {
    /// Wall-clock budget per decision, in milliseconds.
    pub time_limit_ms: u64,

    /// Stop after this depth completes (None = until the budget runs out).
    pub max_depth: Option<u32>,
}

impl Default for DeepeningConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 10,
            max_depth: None,
        }
    }
}

impl DeepeningConfig {
    /// Set the time budget.
    pub fn with_time_limit(mut self, time_limit_ms: u64) -> Self {
        self.time_limit_ms = time_limit_ms;
        self
    }

    /// Set the depth cap.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Check the parameters are usable.
    pub fn validate(&self) -> Result<()> {
        if self.time_limit_ms == 0 {
            return Err(SearchError::InvalidConfig(
                "time_limit_ms must be positive".to_string(),
            ));
        }
        if self.max_depth == Some(0) {
            return Err(SearchError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of the deepest fully completed iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeepeningOutcome<A> {
    pub action: A,
    pub score: Score,
    /// Depth of the iteration that produced `action`.
    pub completed_depth: u32,
}

/// Alpha-beta at depth 1, 2, 3, ... until the time budget runs out.
///
/// An iteration interrupted by the budget is thrown away; the answer always
/// comes from the last iteration that finished. Subtrees cut short by the
/// budget count as 0, so values close to the deadline are approximate.
#[derive(Clone, Debug)]
pub struct IterativeDeepening<E = StateScore> {
    config: DeepeningConfig,
    evaluator: E,
}

impl IterativeDeepening<StateScore> {
    /// Deepen using the state's own score.
    ///
    /// The config is not checked: a zero budget gives a search that never
    /// completes a depth. Use [`IterativeDeepening::try_new`] to reject it.
    #[must_use]
    pub fn new(config: DeepeningConfig) -> Self {
        Self::with_evaluator(config, StateScore)
    }

    /// Like [`IterativeDeepening::new`], but validates the config first.
    pub fn try_new(config: DeepeningConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl<E> IterativeDeepening<E> {
    /// Deepen using a custom evaluation.
    #[must_use]
    pub fn with_evaluator(config: DeepeningConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &DeepeningConfig {
        &self.config
    }

    /// Run the deepening loop from `state`.
    ///
    /// Returns `None` if there is nothing to search or no depth completed
    /// within the budget.
    pub fn search<S>(&self, state: &S) -> Option<DeepeningOutcome<S::Action>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let keeper = TimeKeeper::new(self.config.time_limit_ms);
        let mut best = None;

        for depth in 1.. {
            if self.config.max_depth.is_some_and(|max| depth > max) {
                break;
            }
            let result = root_search(state, depth, &self.evaluator, Some(&keeper));
            if keeper.is_time_over() {
                debug!(
                    depth,
                    elapsed_ms = keeper.elapsed().as_millis() as u64,
                    "Deepening abandoned"
                );
                break;
            }
            let Some((action, score)) = result else {
                break;
            };
            debug!(depth, score, "Deepening iteration complete");
            best = Some(DeepeningOutcome {
                action,
                score,
                completed_depth: depth,
            });
        }
        best
    }
}

impl<S, E> Strategy<S> for IterativeDeepening<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    /// Falls back to the first searchable action when no depth completed.
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.search(state)
            .map(|outcome| outcome.action)
            .or_else(|| state.search_actions().first().copied())
    }

    fn name(&self) -> &str {
        "iterative-deepening"
    }
}
