//! Core types: the state contract, randomness, time budget, hashing, errors.
//!
//! Everything here is game-agnostic. Games implement the traits in `state`;
//! algorithms only ever talk to those traits.

pub mod error;
pub mod rng;
pub mod state;
pub mod timer;
pub mod zobrist;

pub use error::{Result, SearchError};
pub use rng::GameRng;
pub use state::{
    CostedState, Evaluator, GameState, HashedState, Score, ScoredState, StateScore,
    WinningStatus, INF,
};
pub use timer::TimeKeeper;
