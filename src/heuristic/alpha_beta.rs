//! Fail-hard alpha-beta pruning.
//!
//! Returns the same root action and value as [`MiniMax`](super::MiniMax) at
//! the same depth. Internal nodes may return a bound instead of the exact
//! value once a cutoff fires; the root never prunes against itself, so its
//! choice is always exact.

use crate::core::{Evaluator, GameState, Score, StateScore, TimeKeeper, INF};
use crate::play::Strategy;

/// Window search shared by plain and time-boxed alpha-beta.
///
/// With a `keeper`, time is polled on entry and after every child, and a
/// timed-out subtree is worth 0. Callers must discard any result produced
/// after the budget ran out.
pub(crate) fn window_value<S, E>(
    state: &S,
    mut alpha: Score,
    beta: Score,
    depth: u32,
    evaluator: &E,
    keeper: Option<&TimeKeeper>,
) -> Score
where
    S: GameState,
    E: Evaluator<S>,
{
    let timed_out = || keeper.is_some_and(TimeKeeper::is_time_over);
    if timed_out() {
        return 0;
    }
    if state.is_done() || depth == 0 {
        return evaluator.evaluate(state);
    }
    let actions = state.search_actions();
    if actions.is_empty() {
        return evaluator.evaluate(state);
    }

    for action in actions {
        let mut next = state.clone();
        next.step(action);
        let score = -window_value(&next, -beta, -alpha, depth - 1, evaluator, keeper);
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            return alpha;
        }
        if timed_out() {
            return 0;
        }
    }
    alpha
}

/// Root of an alpha-beta search: full window, first strictly better action.
///
/// Stops early (with a result the caller must discard) if the budget of
/// `keeper` runs out between children.
pub(crate) fn root_search<S, E>(
    state: &S,
    depth: u32,
    evaluator: &E,
    keeper: Option<&TimeKeeper>,
) -> Option<(S::Action, Score)>
where
    S: GameState,
    E: Evaluator<S>,
{
    let mut alpha = -INF;
    let mut best = None;
    for action in state.search_actions() {
        let mut next = state.clone();
        next.step(action);
        let score = -window_value(&next, -INF, -alpha, depth, evaluator, keeper);
        if best.is_none() || score > alpha {
            best = Some(action);
            alpha = alpha.max(score);
        }
        if keeper.is_some_and(TimeKeeper::is_time_over) {
            break;
        }
    }
    best.map(|action| (action, alpha))
}

/// Alpha-beta search to a fixed depth.
#[derive(Clone, Debug)]
pub struct AlphaBeta<E = StateScore> {
    depth: u32,
    evaluator: E,
}

impl AlphaBeta<StateScore> {
    /// Search to `depth` using the state's own score.
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self::with_evaluator(depth, StateScore)
    }
}

impl<E> AlphaBeta<E> {
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

    /// Value of `state` within the window `(alpha, beta)`.
    pub fn value<S>(&self, state: &S, alpha: Score, beta: Score, depth: u32) -> Score
    where
        S: GameState,
        E: Evaluator<S>,
    {
        window_value(state, alpha, beta, depth, &self.evaluator, None)
    }

    /// Best root action and its exact value.
    pub fn search<S>(&self, state: &S) -> Option<(S::Action, Score)>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        root_search(state, self.depth, &self.evaluator, None)
    }
}

impl<S, E> Strategy<S> for AlphaBeta<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.search(state).map(|(action, _)| action)
    }

    fn name(&self) -> &str {
        "alpha-beta"
    }
}
