//! 3x3 three-in-a-row game with an incremental zobrist hash.
//!
//! Cells live in a `u16` with a 4-bit stride per row (bits 0-2, 4-6, 8-10),
//! so the spare bit between rows stops horizontal and diagonal runs from
//! wrapping.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::zobrist::key_table;
use crate::core::{GameState, HashedState, Score, ScoredState, WinningStatus};

const FULL_BOARD: u16 = 0x0777;
const ZOBRIST_SEED: u64 = 0x7177_7ac7_0e5e_ed01;

/// Keys indexed by [color][bit index]. Black is color 0.
fn zobrist_keys() -> &'static [[u64; 11]; 2] {
    static KEYS: OnceLock<[[u64; 11]; 2]> = OnceLock::new();
    KEYS.get_or_init(|| key_table(ZOBRIST_SEED))
}

/// A single-bit cell mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell(pub u16);

impl Cell {
    /// Cell from (row, column), both in 0..3.
    #[must_use]
    pub const fn at(row: u16, col: u16) -> Self {
        Cell(1 << (row * 4 + col))
    }

    /// (row, column) of this cell.
    #[must_use]
    pub fn coordinates(self) -> (u16, u16) {
        let bit = self.0.trailing_zeros() as u16;
        (bit / 4, bit % 4)
    }
}

#[inline]
fn run_ends(bits: u16, stride: u32) -> u16 {
    let pairs = bits & (bits << stride);
    pairs & (pairs << stride)
}

#[inline]
fn has_three(bits: u16) -> bool {
    (run_ends(bits, 1) | run_ends(bits, 4) | run_ends(bits, 5) | run_ends(bits, 3)) != 0
}

/// Tic-tac-toe position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToe {
    turn: u32,
    is_black_turn: bool,
    hash: u64,
    player: u16,
    opponent: u16,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// Empty board, black (x) to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            turn: 0,
            is_black_turn: true,
            hash: 0,
            player: 0,
            opponent: 0,
        }
    }

    /// Whether black (x) is the side to move.
    #[must_use]
    pub fn is_black_turn(&self) -> bool {
        self.is_black_turn
    }

    fn colored_bits(&self) -> (u16, u16) {
        if self.is_black_turn {
            (self.player, self.opponent)
        } else {
            (self.opponent, self.player)
        }
    }
}

impl GameState for TicTacToe {
    type Action = Cell;

    fn step(&mut self, action: Cell) {
        let color = usize::from(!self.is_black_turn);
        self.player ^= action.0;
        self.hash ^= zobrist_keys()[color][action.0.trailing_zeros() as usize];
        std::mem::swap(&mut self.player, &mut self.opponent);
        self.turn += 1;
        self.is_black_turn = !self.is_black_turn;
    }

    fn legal_actions(&self) -> Vec<Cell> {
        if self.is_done() {
            return Vec::new();
        }
        let mut cells = !(self.player | self.opponent) & FULL_BOARD;
        let mut actions = Vec::with_capacity(cells.count_ones() as usize);
        while cells != 0 {
            let lowest = cells & cells.wrapping_neg();
            actions.push(Cell(lowest));
            cells ^= lowest;
        }
        actions
    }

    fn is_done(&self) -> bool {
        has_three(self.player)
            || has_three(self.opponent)
            || (self.player | self.opponent) == FULL_BOARD
    }

    fn winning_status(&self) -> WinningStatus {
        if has_three(self.player) {
            WinningStatus::Win
        } else if has_three(self.opponent) {
            WinningStatus::Lose
        } else if (self.player | self.opponent) == FULL_BOARD {
            WinningStatus::Draw
        } else {
            WinningStatus::None
        }
    }

    fn turn(&self) -> u32 {
        self.turn
    }
}

impl HashedState for TicTacToe {
    fn hash_value(&self) -> u64 {
        self.hash
    }
}

impl ScoredState for TicTacToe {
    /// +1 / -1 / 0 for finished games, 0 otherwise.
    fn score(&self) -> Score {
        match self.winning_status() {
            WinningStatus::Win => 1,
            WinningStatus::Lose => -1,
            WinningStatus::Draw | WinningStatus::None => 0,
        }
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (black, white) = self.colored_bits();
        writeln!(f, "Turn\t{}", self.turn)?;
        for row in 0..3 {
            let line: Vec<&str> = (0..3)
                .map(|col| {
                    let bit = Cell::at(row, col).0;
                    if black & bit != 0 {
                        "x"
                    } else if white & bit != 0 {
                        "o"
                    } else {
                        "."
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(cells: &[(u16, u16)]) -> TicTacToe {
        let mut state = TicTacToe::new();
        for &(row, col) in cells {
            state.step(Cell::at(row, col));
        }
        state
    }

    #[test]
    fn test_new_board() {
        let state = TicTacToe::new();
        assert_eq!(state.legal_actions().len(), 9);
        assert!(!state.is_done());
        assert_eq!(state.hash_value(), 0);
    }

    #[test]
    fn test_row_win_for_mover_that_just_played() {
        // x: top row, o: middle row partial
        let state = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(state.is_done());
        // o is to move and has lost.
        assert_eq!(state.winning_status(), WinningStatus::Lose);
        assert_eq!(state.score(), -1);
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_diagonals_detected() {
        let main = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        assert_eq!(main.winning_status(), WinningStatus::Lose);

        let anti = play(&[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
        assert_eq!(anti.winning_status(), WinningStatus::Lose);
    }

    #[test]
    fn test_no_wraparound_runs() {
        // Cells (0,2), (1,0), (1,1) are consecutive indices only with a
        // packed layout; they must not count as a line.
        let state = play(&[(0, 2), (2, 2), (1, 0), (2, 1), (1, 1)]);
        assert_eq!(state.winning_status(), WinningStatus::None);
    }

    #[test]
    fn test_draw() {
        let state = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        assert!(state.is_done());
        assert_eq!(state.winning_status(), WinningStatus::Draw);
    }

    #[test]
    fn test_hash_ignores_move_order() {
        let a = play(&[(0, 0), (1, 1), (2, 2)]);
        let b = play(&[(2, 2), (1, 1), (0, 0)]);
        assert_eq!(a.hash_value(), b.hash_value());

        // Same cells, swapped colors.
        let c = play(&[(1, 1), (0, 0), (2, 2)]);
        assert_ne!(a.hash_value(), c.hash_value());
    }

    #[test]
    fn test_cell_coordinates() {
        assert_eq!(Cell::at(2, 1).coordinates(), (2, 1));
        assert_eq!(Cell::at(0, 0).0, 1);
        assert_eq!(Cell::at(1, 0).0, 1 << 4);
    }

    #[test]
    fn test_display() {
        let text = play(&[(0, 0), (1, 1)]).to_string();
        assert_eq!(text, "Turn\t2\nx . .\n. o .\n. . .\n");
    }
}
