//! Playing full games with search algorithms.
//!
//! Every algorithm in the crate implements [`Strategy`]. The driver asks the
//! seat to move for an action each turn, falls back to the game's pass
//! action when none is given, and tallies results from the first
//! strategy's point of view.

mod driver;
mod strategy;

pub use driver::{play_game, run_match, GameRecord, MatchStats};
pub use strategy::{RandomStrategy, Strategy};
