//! Monte Carlo search.
//!
//! ## Overview
//!
//! Three searches share the playout and selection policies in [`policy`]:
//!
//! - [`PrimitiveMonteCarlo`]: playouts spread evenly over the root actions,
//!   best win rate wins
//! - [`Uct`]: UCB1 over the root actions, most visited wins
//! - [`MCTSSearch`]: an explicit tree grown by expanding leaves that reach
//!   the expansion threshold, most visited root child wins
//!
//! Rewards are in [0, 1] and always seen from the side to move at the node
//! that records them; one ply up a reward `r` is worth `1 - r`.
//!
//! ## Usage
//!
//! ```rust
//! use rust_search::games::Othello;
//! use rust_search::mcts::{MCTSConfig, MCTSSearch};
//!
//! let config = MCTSConfig::default().with_playouts(200).with_seed(1);
//! let mut search = MCTSSearch::new(config);
//!
//! let action = search.search(&Othello::new());
//! assert!(action.is_some());
//!
//! for (action, visits) in search.action_visits() {
//!     println!("{}: {} visits", action, visits);
//! }
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod primitive;
pub mod search;
pub mod stats;
pub mod tree;
pub mod uct;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{MCTSNode, NodeId};
pub use policy::{ArmStats, RandomPlayout, SelectionPolicy, SimulationPolicy, UCB1};
pub use primitive::PrimitiveMonteCarlo;
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
pub use uct::Uct;
