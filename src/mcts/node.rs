//! Progressive tree node structures.
//!
//! Uses arena-based allocation with index references (NodeId). A node owns
//! its position by value and knows the action that led to it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::policy::ArmStats;
use crate::core::GameState;

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the progressive tree.
#[derive(Clone, Debug)]
pub struct MCTSNode<S: GameState> {
    /// Position at this node.
    pub state: S,

    /// Action from the parent that produced `state` (None for the root).
    pub action: Option<S::Action>,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Times this node was evaluated.
    pub visits: u32,

    /// Rewards collected, from the perspective of the side to move here.
    pub total_reward: f64,

    /// Children, one per searchable action, in action order.
    /// Empty until the node is expanded.
    pub children: SmallVec<[NodeId; 8]>,
}

impl<S: GameState> MCTSNode<S> {
    /// Create a new node.
    pub fn new(state: S, action: Option<S::Action>, parent: NodeId, depth: u16) -> Self {
        Self {
            state,
            action,
            parent,
            depth,
            visits: 0,
            total_reward: 0.0,
            children: SmallVec::new(),
        }
    }

    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self::new(state, None, NodeId::NONE, 0)
    }

    /// Check if the node has not been expanded yet.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Get the mean reward for the side to move here.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / f64::from(self.visits)
        }
    }

    /// Statistics of this node as an arm of its parent.
    ///
    /// The parent's mover is the other side, so rewards are flipped.
    #[must_use]
    pub fn as_parent_arm(&self) -> ArmStats {
        ArmStats {
            visits: self.visits,
            total_reward: f64::from(self.visits) - self.total_reward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Cell, TicTacToe};

    #[test]
    fn test_node_id() {
        let id = NodeId(5);
        assert!(!id.is_none());
        assert_eq!(id.index(), 5);
        assert_eq!(format!("{}", id), "NodeId(5)");

        assert!(NodeId::NONE.is_none());
        assert_eq!(format!("{}", NodeId::NONE), "NodeId(NONE)");
    }

    #[test]
    fn test_node_root() {
        let node = MCTSNode::root(TicTacToe::new());

        assert!(node.parent.is_none());
        assert!(node.action.is_none());
        assert_eq!(node.depth, 0);
        assert_eq!(node.visits, 0);
        assert!(node.is_leaf());
        assert_eq!(node.mean_reward(), 0.0);
    }

    #[test]
    fn test_parent_arm_flips_rewards() {
        let mut state = TicTacToe::new();
        state.step(Cell::at(1, 1));
        let mut node = MCTSNode::new(state, Some(Cell::at(1, 1)), NodeId(0), 1);
        node.visits = 4;
        node.total_reward = 1.0;

        assert_eq!(node.mean_reward(), 0.25);
        let arm = node.as_parent_arm();
        assert_eq!(arm.visits, 4);
        assert_eq!(arm.mean_reward(), 0.75);
    }
}
