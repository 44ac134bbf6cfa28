//! Depth-limited negamax.

use crate::core::{Evaluator, GameState, Score, StateScore, INF};
use crate::play::Strategy;

/// Exhaustive negamax to a fixed depth.
///
/// The root evaluates each action with the full `depth` below it, so a
/// search of depth `d` looks `d + 1` plies ahead.
#[derive(Clone, Debug)]
pub struct MiniMax<E = StateScore> {
    depth: u32,
    evaluator: E,
}

impl MiniMax<StateScore> {
    /// Search to `depth` using the state's own score.
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self::with_evaluator(depth, StateScore)
    }
}

impl<E> MiniMax<E> {
    /// Search to `depth` using a custom evaluation.
    #[must_use]
    pub fn with_evaluator(depth: u32, evaluator: E) -> Self {
        Self { depth, evaluator }
    }

    /// Configured search depth.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Negamax value of `state` searched `depth` plies deep.
    pub fn value<S>(&self, state: &S, depth: u32) -> Score
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if state.is_done() || depth == 0 {
            return self.evaluator.evaluate(state);
        }
        let actions = state.search_actions();
        if actions.is_empty() {
            return self.evaluator.evaluate(state);
        }

        let mut best = -INF;
        for action in actions {
            let mut next = state.clone();
            next.step(action);
            best = best.max(-self.value(&next, depth - 1));
        }
        best
    }

    /// Best root action and its value, first maximum wins.
    ///
    /// Returns `None` when the side to move has nothing to search.
    pub fn search<S>(&self, state: &S) -> Option<(S::Action, Score)>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let mut best: Option<(S::Action, Score)> = None;
        for action in state.search_actions() {
            let mut next = state.clone();
            next.step(action);
            let score = -self.value(&next, self.depth);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((action, score));
            }
        }
        best
    }
}

impl<S, E> Strategy<S> for MiniMax<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.search(state).map(|(action, _)| action)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
