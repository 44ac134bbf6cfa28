//! Score-based adversarial search.
//!
//! All three searches use the negamax convention: a child's value is negated
//! when passed to the parent, and every score is seen from the side to move.
//!
//! - [`MiniMax`]: exhaustive search to a fixed depth
//! - [`AlphaBeta`]: the same result with pruning
//! - [`IterativeDeepening`]: alpha-beta at growing depths under a time budget

mod alpha_beta;
mod iterative;
mod minimax;

pub use alpha_beta::AlphaBeta;
pub use iterative::{DeepeningConfig, DeepeningOutcome, IterativeDeepening};
pub use minimax::MiniMax;
