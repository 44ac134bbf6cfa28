//! Optimal single-agent pathfinding over [`CostedState`](crate::core::CostedState).
//!
//! Both searches return a [`SearchPath`] from the start to the first goal
//! (a state with `is_done()`), deduplicating states by zobrist hash.

mod arena;
mod path;

pub mod a_star;
pub mod ida_star;

pub use a_star::a_star;
pub use ida_star::{ida_star, IdaOutcome};
pub use path::SearchPath;
