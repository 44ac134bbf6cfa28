//! # rust-search
//!
//! Game-tree and heuristic search algorithms over small deterministic games.
//!
//! ## Design Principles
//!
//! 1. **Algorithms see only traits**: every search is generic over the
//!    capability traits in [`core`]. A game opts in to the algorithms it
//!    supports by implementing the matching trait.
//!
//! 2. **States are values**: search code clones a state, steps the clone and
//!    never mutates a state a sibling branch can still see.
//!
//! 3. **Deterministic by default**: every random choice goes through an
//!    explicitly seeded [`GameRng`], and every tie goes to the first action
//!    in `legal_actions` order.
//!
//! ## Modules
//!
//! - `core`: state traits, RNG, time budget, zobrist keys, errors
//! - `games`: Othello, tic-tac-toe and the fifteen puzzle
//! - `heuristic`: minimax, alpha-beta, iterative deepening
//! - `mcts`: primitive Monte Carlo, UCT, progressive tree search
//! - `proof`: AND/OR proof search, memoized and exhaustive solvers
//! - `pathfinding`: A* and IDA*
//! - `play`: the `Strategy` trait and the match driver

pub mod core;
pub mod games;
pub mod heuristic;
pub mod mcts;
pub mod pathfinding;
pub mod play;
pub mod proof;

// Re-export commonly used types
pub use crate::core::{
    CostedState, Evaluator, GameRng, GameState, HashedState, Result, Score, ScoredState,
    SearchError, StateScore, TimeKeeper, WinningStatus, INF,
};

pub use crate::games::{Cell, CellWeights, FifteenPuzzle, Move, Othello, Slide, TicTacToe};

pub use crate::heuristic::{
    AlphaBeta, DeepeningConfig, DeepeningOutcome, IterativeDeepening, MiniMax,
};

pub use crate::mcts::{
    MCTSConfig, MCTSSearch, MCTSTree, PrimitiveMonteCarlo, RandomPlayout, SearchStats,
    SelectionPolicy, SimulationPolicy, Uct, UCB1,
};

pub use crate::proof::{AndOrSearch, ExhaustiveSearch, MemoizedAndOrSearch};

pub use crate::pathfinding::{a_star, ida_star, IdaOutcome, SearchPath};

pub use crate::play::{play_game, run_match, GameRecord, MatchStats, RandomStrategy, Strategy};
