//! Progressive tree search.
//!
//! Grows an explicit game tree one expansion at a time. A leaf is scored by
//! a playout; once it has been visited `expansion_threshold` times it gets a
//! child per searchable action. Internal nodes recurse into the child chosen
//! by the selection policy on flipped child statistics, and every node on the
//! path records the reward from its own mover's point of view.

use std::time::Instant;

use tracing::trace;

use super::config::MCTSConfig;
use super::node::NodeId;
use super::policy::{
    most_visited, terminal_reward, ArmStats, RandomPlayout, SelectionPolicy, SimulationPolicy,
    UCB1,
};
use super::stats::SearchStats;
use super::tree::MCTSTree;
use crate::core::{GameRng, GameState, Result};
use crate::play::Strategy;

/// Progressive tree search context.
///
/// Owns the configuration, the random source and the tree of the last
/// search.
pub struct MCTSSearch<S: GameState> {
    /// Search configuration.
    config: MCTSConfig,

    /// Tree built by the last search.
    tree: Option<MCTSTree<S>>,

    /// RNG for playouts.
    rng: GameRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Simulation policy.
    simulation: Box<dyn SimulationPolicy<S>>,

    /// Search statistics.
    stats: SearchStats,
}

impl<S: GameState + 'static> MCTSSearch<S> {
    /// Create a new search context.
    ///
    /// The config is taken as is; use [`MCTSSearch::try_new`] to check it.
    pub fn new(config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);

        Self {
            config,
            tree: None,
            rng,
            selection: Box::new(UCB1),
            simulation: Box::new(RandomPlayout),
            stats: SearchStats::default(),
        }
    }

    /// Create a search context after validating the config.
    pub fn try_new(config: MCTSConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Set a custom selection policy.
    pub fn with_selection<P: SelectionPolicy + 'static>(mut self, selection: P) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    pub fn with_simulation<P: SimulationPolicy<S> + 'static>(mut self, simulation: P) -> Self {
        self.simulation = Box::new(simulation);
        self
    }
}

impl<S: GameState> MCTSSearch<S> {
    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Tree built by the last search.
    #[must_use]
    pub fn tree(&self) -> Option<&MCTSTree<S>> {
        self.tree.as_ref()
    }

    /// Root actions of the last search with their visit counts.
    #[must_use]
    pub fn action_visits(&self) -> Vec<(S::Action, u32)> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };
        tree.root_node()
            .children
            .iter()
            .filter_map(|&child| {
                let node = tree.get(child);
                node.action.map(|action| (action, node.visits))
            })
            .collect()
    }

    /// Run `config.playouts` evaluations from `state`.
    ///
    /// Returns the most visited root action, or `None` if there is nothing
    /// to search.
    pub fn search(&mut self, state: &S) -> Option<S::Action> {
        let start = Instant::now();
        self.stats.reset();

        let mut tree = MCTSTree::with_capacity(state.clone(), self.config.max_nodes.min(1024));
        let root = tree.root();

        // The root is expanded up front.
        let width = tree.expand(root);
        self.stats.nodes_expanded = width as u32;
        self.stats.max_depth = u16::from(width > 0);
        if width == 0 {
            self.tree = Some(tree);
            return None;
        }

        // Single action: no choice to make.
        if width == 1 {
            let only = tree.get(tree.get(root).children[0]).action;
            self.tree = Some(tree);
            return only;
        }

        for _ in 0..self.config.playouts {
            self.evaluate(&mut tree, root);
        }

        let arms: Vec<ArmStats> = tree
            .get(root)
            .children
            .iter()
            .map(|&child| tree.get(child).as_parent_arm())
            .collect();
        let best = most_visited(&arms).and_then(|i| tree.get(tree.get(root).children[i]).action);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        trace!(
            playouts = self.stats.playouts,
            nodes = tree.len(),
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            "Progressive tree search complete"
        );

        self.tree = Some(tree);
        best
    }

    /// One evaluation of `id`: the reward for the side to move at `id`.
    fn evaluate(&mut self, tree: &mut MCTSTree<S>, id: NodeId) -> f64 {
        let node = tree.get(id);
        let value = if node.state.is_done() {
            terminal_reward(node.state.winning_status())
        } else if node.is_leaf() {
            let visits = node.visits;
            let depth = node.depth;
            let value = self.simulation.simulate(node.state.clone(), &mut self.rng);
            self.stats.playouts += 1;

            if visits == self.config.expansion_threshold && tree.len() < self.config.max_nodes {
                let added = tree.expand(id);
                if added > 0 {
                    self.stats.nodes_expanded += added as u32;
                    self.stats.max_depth = self.stats.max_depth.max(depth + 1);
                }
            }
            value
        } else {
            let child = self.select_child(tree, id);
            1.0 - self.evaluate(tree, child)
        };

        let node = tree.get_mut(id);
        node.visits += 1;
        node.total_reward += value;
        value
    }

    fn select_child(&self, tree: &MCTSTree<S>, id: NodeId) -> NodeId {
        let children = &tree.get(id).children;
        let arms: Vec<ArmStats> = children
            .iter()
            .map(|&child| tree.get(child).as_parent_arm())
            .collect();
        let index = self.selection.select(&arms, &self.config).unwrap_or(0);
        children[index]
    }
}

impl<S: GameState> Strategy<S> for MCTSSearch<S> {
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.search(state)
    }

    fn name(&self) -> &str {
        "progressive-tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SearchError;
    use crate::games::{Cell, Othello, TicTacToe};

    fn config(playouts: u32) -> MCTSConfig {
        MCTSConfig::default().with_playouts(playouts).with_seed(7)
    }

    #[test]
    fn test_try_new_rejects_bad_config() {
        assert!(matches!(
            MCTSSearch::<Othello>::try_new(config(0)),
            Err(SearchError::InvalidConfig(_))
        ));
        assert!(MCTSSearch::<Othello>::try_new(config(50)).is_ok());
    }

    #[test]
    fn test_root_visits_sum_to_playouts() {
        let mut search = MCTSSearch::new(config(300));
        let action = search.search(&Othello::new());

        assert!(action.is_some());
        let visits: u32 = search.action_visits().iter().map(|&(_, n)| n).sum();
        assert_eq!(visits, 300);
        assert_eq!(search.tree().unwrap().root_node().visits, 300);
        assert_eq!(search.stats().playouts, 300);
    }

    #[test]
    fn test_nodes_expand_after_threshold_visits() {
        let mut search = MCTSSearch::new(config(500));
        search.search(&Othello::new());
        let threshold = search.config().expansion_threshold;

        let tree = search.tree().unwrap();
        for (id, node) in tree.iter() {
            if id == tree.root() || node.state.is_done() {
                continue;
            }
            assert_eq!(node.is_leaf(), node.visits <= threshold, "{}", id);
        }
        assert!(search.stats().max_depth >= 2);
    }

    #[test]
    fn test_max_nodes_caps_growth() {
        let mut search = MCTSSearch::new(config(2_000).with_max_nodes(50));
        search.search(&TicTacToe::new());
        let tree = search.tree().unwrap();
        // The last expansion may overshoot by one node's children.
        assert!(tree.len() < 50 + 9);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut state = TicTacToe::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            state.step(Cell::at(row, col));
        }
        let mut search = MCTSSearch::new(config(1_000));
        assert_eq!(search.search(&state), Some(Cell::at(0, 2)));
    }

    #[test]
    fn test_single_action_short_circuits() {
        let mut search = MCTSSearch::new(config(100));
        let action = search.search(&Othello::from_bitboards(0x2, 0x1));
        assert_eq!(action, Othello::PASS);
        assert_eq!(search.stats().playouts, 0);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let state = Othello::new();
        let mut a = MCTSSearch::new(config(200));
        let mut b = MCTSSearch::new(config(200));
        assert_eq!(a.search(&state), b.search(&state));
        assert_eq!(a.action_visits(), b.action_visits());
    }
}
