//! Plain AND/OR proof search.
//!
//! Answers "can the side to move force a win?" for games decided only by
//! WIN/LOSE/DRAW. An OR node (searcher to move) is proved if any child AND
//! node is; an AND node (opponent to move) is proved only if every child OR
//! node is. A draw disproves both.

use crate::core::{GameState, WinningStatus};
use crate::play::Strategy;

/// Whether the side to move can force a win from `state`.
pub fn or_value<S: GameState>(state: &S) -> bool {
    match state.winning_status() {
        WinningStatus::Win => true,
        WinningStatus::Lose | WinningStatus::Draw => false,
        WinningStatus::None => state.search_actions().into_iter().any(|action| {
            let mut next = state.clone();
            next.step(action);
            and_value(&next)
        }),
    }
}

/// Whether the side that just moved into `state` can force a win, whatever
/// the side to move replies.
pub fn and_value<S: GameState>(state: &S) -> bool {
    match state.winning_status() {
        WinningStatus::Lose => true,
        WinningStatus::Win | WinningStatus::Draw => false,
        WinningStatus::None => state.search_actions().into_iter().all(|action| {
            let mut next = state.clone();
            next.step(action);
            or_value(&next)
        }),
    }
}

/// Plays the first action that forces a win, or the first action when none
/// does.
#[derive(Clone, Copy, Debug, Default)]
pub struct AndOrSearch;

impl AndOrSearch {
    /// First action after which the opponent cannot avoid losing.
    pub fn winning_action<S: GameState>(&self, state: &S) -> Option<S::Action> {
        state.search_actions().into_iter().find(|&action| {
            let mut next = state.clone();
            next.step(action);
            and_value(&next)
        })
    }
}

impl<S: GameState> Strategy<S> for AndOrSearch {
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.winning_action(state)
            .or_else(|| state.search_actions().first().copied())
    }

    fn name(&self) -> &str {
        "and-or"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Cell, TicTacToe};

    fn play(cells: &[(u16, u16)]) -> TicTacToe {
        let mut state = TicTacToe::new();
        for &(row, col) in cells {
            state.step(Cell::at(row, col));
        }
        state
    }

    #[test]
    fn test_empty_board_is_not_a_forced_win() {
        assert!(!or_value(&TicTacToe::new()));
    }

    #[test]
    fn test_immediate_win_is_proved() {
        let state = play(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert!(or_value(&state));
        assert_eq!(AndOrSearch.winning_action(&state), Some(Cell::at(0, 2)));
    }

    #[test]
    fn test_double_threat_is_proved() {
        // x . o
        // . o .
        // x . x   o to move cannot cover both (1,0) and (2,1).
        let state = play(&[(0, 0), (1, 1), (2, 2), (0, 2), (2, 0)]);
        assert!(and_value(&state));
        assert!(!or_value(&state));
    }

    #[test]
    fn test_terminal_values() {
        let lost = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(!or_value(&lost));
        assert!(and_value(&lost));
    }

    #[test]
    fn test_falls_back_to_first_action() {
        let state = TicTacToe::new();
        let mut search = AndOrSearch;
        assert_eq!(search.choose_action(&state), Some(Cell::at(0, 0)));
    }
}
