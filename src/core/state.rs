//! The capability contract every game or puzzle model provides to the
//! search layer.
//!
//! ## Layers
//!
//! - `GameState`: stepping, legal actions, terminal detection. Enough for
//!   the Monte Carlo family and AND/OR proof search.
//! - `ScoredState` / `Evaluator`: a mover-relative static evaluation, used by
//!   minimax, alpha-beta and iterative deepening.
//! - `HashedState`: an incrementally maintained zobrist hash, used as the key
//!   of transposition tables and pathfinding dedup sets.
//! - `CostedState`: path cost and admissible heuristic for A* / IDA*.
//!
//! States are value types. Search code clones a state, steps the clone, and
//! never mutates a state that a sibling branch can still observe.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mover-relative evaluation. Zero-sum: the score of a position for the
/// side that just moved is the negation of the score for the side to move.
pub type Score = i32;

/// Bound used as the initial alpha-beta window.
///
/// Chosen so that `-INF` is representable and no evaluation reaches it.
pub const INF: Score = 1_000_000_001;

/// Outcome of a finished game, seen from the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinningStatus {
    /// The game is not over.
    None,
    /// The side to move has won.
    Win,
    /// The side to move has lost.
    Lose,
    /// Neither side won.
    Draw,
}

impl WinningStatus {
    /// The same outcome seen from the other side.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            WinningStatus::Win => WinningStatus::Lose,
            WinningStatus::Lose => WinningStatus::Win,
            other => other,
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != WinningStatus::None
    }
}

/// A position of a deterministic, perfect-information game.
///
/// ## Implementation Notes
///
/// - `legal_actions`: must enumerate in a stable order. Tie-breaking in every
///   search is "first maximum wins", so the order decides the result.
/// - `step`: only called with actions returned by `legal_actions` or with
///   `PASS`. Anything else is a contract violation and is not checked.
/// - `winning_status`: `WinningStatus::None` until `is_done` holds.
pub trait GameState: Clone {
    /// Move token. Only meaningful for the state that produced it.
    type Action: Copy + Eq + fmt::Debug;

    /// Action that advances the turn without changing the payload.
    ///
    /// Games where the side to move can be left without a legal move while
    /// the game continues (Othello) must provide one.
    const PASS: Option<Self::Action> = None;

    /// Apply an action in place.
    fn step(&mut self, action: Self::Action);

    /// Enumerate the legal actions for the side to move.
    ///
    /// Returns an empty vec if the side to move cannot act.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Check whether the game is over.
    fn is_done(&self) -> bool;

    /// Outcome relative to the side to move.
    fn winning_status(&self) -> WinningStatus;

    /// Number of actions applied since the initial position.
    fn turn(&self) -> u32;

    /// Actions a search should branch on.
    ///
    /// Same as `legal_actions`, except that a non-terminal position without
    /// legal actions yields `[PASS]` so the turn still advances.
    fn search_actions(&self) -> Vec<Self::Action> {
        let mut actions = self.legal_actions();
        if actions.is_empty() && !self.is_done() {
            if let Some(pass) = Self::PASS {
                actions.push(pass);
            }
        }
        actions
    }
}

/// A state with a built-in static evaluation.
pub trait ScoredState: GameState {
    /// Evaluation from the perspective of the side to move.
    fn score(&self) -> Score;
}

/// A pluggable static evaluation function.
///
/// Lets one game offer several evaluations (piece count, positional
/// weights) to the same search.
pub trait Evaluator<S> {
    /// Evaluate `state` from the perspective of the side to move.
    fn evaluate(&self, state: &S) -> Score;
}

/// Evaluator that defers to `ScoredState::score`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StateScore;

impl<S: ScoredState> Evaluator<S> for StateScore {
    #[inline]
    fn evaluate(&self, state: &S) -> Score {
        state.score()
    }
}

/// A state carrying an incrementally updated zobrist hash.
///
/// Two states with the same payload must hash identically regardless of
/// the move order that produced them.
pub trait HashedState: GameState {
    /// The current zobrist hash.
    fn hash_value(&self) -> u64;
}

/// A single-agent state with path cost and an admissible heuristic.
pub trait CostedState: HashedState {
    /// Cost of the path from the initial state (g).
    fn path_cost(&self) -> i32;

    /// Estimated remaining cost to the goal (h). Must never overestimate.
    fn heuristic_cost(&self) -> i32;

    /// Frontier priority (f = g + h).
    #[inline]
    fn f_cost(&self) -> i32 {
        self.path_cost() + self.heuristic_cost()
    }
}
