//! Game and puzzle models used to drive the search algorithms.
//!
//! - `Othello`: 8x8 bitboard game with a pass move and two evaluations
//! - `TicTacToe`: 3x3 bitboard game with a zobrist hash
//! - `FifteenPuzzle`: 4x4 sliding puzzle with g/h costs for pathfinding

mod fifteen_puzzle;
mod othello;
mod tictactoe;

pub use fifteen_puzzle::{FifteenPuzzle, Slide};
pub use othello::{CellWeights, Move, Othello};
pub use tictactoe::{Cell, TicTacToe};
