//! Proof search for games decided by WIN/LOSE/DRAW.
//!
//! - [`and_or`]: plain AND/OR search.
//! - [`transposition`]: AND/OR search memoized per root decision.
//! - [`exhaustive`]: full-width solver that counts visited nodes.

pub mod and_or;
pub mod exhaustive;
pub mod transposition;

pub use and_or::{and_value, or_value, AndOrSearch};
pub use exhaustive::ExhaustiveSearch;
pub use transposition::{MemoizedAndOrSearch, ProofSession, TranspositionTable};
