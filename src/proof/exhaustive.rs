//! Exhaustive depth-first game value solver.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{HashedState, Score, WinningStatus};
use crate::play::Strategy;

/// Solves a game to the end and counts the nodes it visits.
///
/// Values are from the side to move: 1 win, -1 loss, 0 draw. With `dedup`
/// on, a position seen before in the same solve is answered from the
/// cache instead of being searched again.
#[derive(Clone, Debug, Default)]
pub struct ExhaustiveSearch {
    dedup: bool,
    values: FxHashMap<u64, Score>,
    node_count: u64,
}

impl ExhaustiveSearch {
    /// Solver that searches every path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Solver that skips positions already solved.
    #[must_use]
    pub fn with_dedup() -> Self {
        Self {
            dedup: true,
            ..Self::default()
        }
    }

    /// Whether transpositions are cached.
    #[must_use]
    pub fn dedup(&self) -> bool {
        self.dedup
    }

    /// Nodes visited by the last solve.
    #[must_use]
    pub fn node_count(&self) -> u64 {
        self.node_count
    }

    /// Game-theoretic value of `state` for the side to move.
    pub fn solve<S: HashedState>(&mut self, state: &S) -> Score {
        self.reset();
        let value = self.value(state);
        debug!(
            value,
            nodes = self.node_count,
            dedup = self.dedup,
            "Exhaustive solve complete"
        );
        value
    }

    /// First action that reaches the best value for the side to move.
    pub fn best_action<S: HashedState>(&mut self, state: &S) -> Option<(S::Action, Score)> {
        self.reset();
        let mut best: Option<(S::Action, Score)> = None;
        for action in state.search_actions() {
            let mut next = state.clone();
            next.step(action);
            let value = -self.child_value(&next);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((action, value));
            }
        }
        best
    }

    fn reset(&mut self) {
        self.values.clear();
        self.node_count = 0;
    }

    fn value<S: HashedState>(&mut self, state: &S) -> Score {
        self.node_count += 1;
        let value = match state.winning_status() {
            WinningStatus::Win => 1,
            WinningStatus::Lose => -1,
            WinningStatus::Draw => 0,
            WinningStatus::None => {
                let mut best: Option<Score> = None;
                for action in state.search_actions() {
                    let mut next = state.clone();
                    next.step(action);
                    let value = -self.child_value(&next);
                    best = Some(best.map_or(value, |b| b.max(value)));
                }
                best.unwrap_or(0)
            }
        };
        if self.dedup {
            self.values.insert(state.hash_value(), value);
        }
        value
    }

    fn child_value<S: HashedState>(&mut self, child: &S) -> Score {
        if self.dedup {
            if let Some(&cached) = self.values.get(&child.hash_value()) {
                return cached;
            }
        }
        self.value(child)
    }
}

impl<S: HashedState> Strategy<S> for ExhaustiveSearch {
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.best_action(state).map(|(action, _)| action)
    }

    fn name(&self) -> &str {
        "exhaustive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::games::{Cell, TicTacToe};

    #[test]
    fn test_full_tree_node_count() {
        let mut search = ExhaustiveSearch::new();
        assert_eq!(search.solve(&TicTacToe::new()), 0);
        assert_eq!(search.node_count(), 549_946);
    }

    #[test]
    fn test_dedup_node_count() {
        let mut search = ExhaustiveSearch::with_dedup();
        assert_eq!(search.solve(&TicTacToe::new()), 0);
        assert_eq!(search.node_count(), 5_478);
    }

    #[test]
    fn test_terminal_value_counts_one_node() {
        let mut state = TicTacToe::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            state.step(Cell::at(row, col));
        }
        let mut search = ExhaustiveSearch::new();
        assert_eq!(search.solve(&state), -1);
        assert_eq!(search.node_count(), 1);
    }

    #[test]
    fn test_best_action_takes_win() {
        let mut state = TicTacToe::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            state.step(Cell::at(row, col));
        }
        let mut search = ExhaustiveSearch::with_dedup();
        assert_eq!(search.best_action(&state), Some((Cell::at(0, 2), 1)));
    }
}
