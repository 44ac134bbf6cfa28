//! Arena-based progressive tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references. The whole arena
//! is dropped with the tree once a decision is made.

use super::node::{MCTSNode, NodeId};
use crate::core::GameState;

/// Arena-based search tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
/// This avoids reference counting overhead.
#[derive(Clone, Debug)]
pub struct MCTSTree<S: GameState> {
    /// All nodes in the tree.
    nodes: Vec<MCTSNode<S>>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl<S: GameState> MCTSTree<S> {
    /// Create a new tree rooted at `state`.
    pub fn new(state: S) -> Self {
        Self::with_capacity(state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(state: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root(state));
        Self {
            nodes,
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode<S> {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode<S> {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MCTSNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Give `id` one child per searchable action.
    ///
    /// Returns the number of children created. Already expanded nodes are
    /// left alone.
    pub fn expand(&mut self, id: NodeId) -> usize {
        let parent = self.get(id);
        if !parent.is_leaf() {
            return 0;
        }
        let depth = parent.depth + 1;
        let children: Vec<MCTSNode<S>> = parent
            .state
            .search_actions()
            .into_iter()
            .map(|action| {
                let mut next = parent.state.clone();
                next.step(action);
                MCTSNode::new(next, Some(action), id, depth)
            })
            .collect();

        let count = children.len();
        for child in children {
            let child_id = self.alloc(child);
            self.get_mut(id).children.push(child_id);
        }
        count
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.state.is_done()).count();
        let expanded_count = self.nodes.iter().filter(|n| !n.is_leaf()).count();
        let total_children: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            expanded_count,
            total_children,
        }
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &MCTSNode<S> {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }
}

/// Statistics about the search tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Number of nodes holding a finished game.
    pub terminal_count: usize,

    /// Number of nodes with children.
    pub expanded_count: usize,

    /// Total number of parent-child links.
    pub total_children: usize,
}

impl TreeStats {
    /// Get the branching factor (average children per expanded node).
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.expanded_count == 0 {
            0.0
        } else {
            self.total_children as f64 / self.expanded_count as f64
        }
    }
}
