//! Flat UCT over the root actions.

use std::time::Instant;

use tracing::trace;

use super::config::MCTSConfig;
use super::policy::{
    most_visited, ArmStats, RandomPlayout, SelectionPolicy, SimulationPolicy, UCB1,
};
use super::stats::SearchStats;
use crate::core::{GameRng, GameState, Result};
use crate::play::Strategy;

/// UCB1 bandit over the root actions, scored by random playouts.
///
/// Each trial picks a root action with the selection policy, plays it, and
/// plays the rest of the game out. The final choice is the most tried
/// action, not the one with the best mean.
pub struct Uct<P = RandomPlayout> {
    config: MCTSConfig,
    rng: GameRng,
    selection: Box<dyn SelectionPolicy>,
    simulation: P,
    arms: Vec<ArmStats>,
    stats: SearchStats,
}

impl Uct<RandomPlayout> {
    /// UCT with UCB1 selection and random playouts.
    ///
    /// The config is not checked; see [`Uct::try_new`].
    pub fn new(config: MCTSConfig) -> Self {
        Self::with_simulation(config, RandomPlayout)
    }

    /// Like [`Uct::new`], but rejects an invalid config.
    pub fn try_new(config: MCTSConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl<P> Uct<P> {
    /// UCT with a custom simulation policy.
    pub fn with_simulation(config: MCTSConfig, simulation: P) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            selection: Box::new(UCB1),
            simulation,
            arms: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<T: SelectionPolicy + 'static>(mut self, selection: T) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Per-action statistics of the last search, in action order.
    #[must_use]
    pub fn arms(&self) -> &[ArmStats] {
        &self.arms
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Run `config.playouts` trials from `state`.
    pub fn search<S>(&mut self, state: &S) -> Option<S::Action>
    where
        S: GameState,
        P: SimulationPolicy<S>,
    {
        let start = Instant::now();
        self.stats.reset();

        let actions = state.search_actions();
        self.arms = vec![ArmStats::default(); actions.len()];
        if actions.is_empty() {
            return None;
        }

        for _ in 0..self.config.playouts {
            let Some(index) = self.selection.select(&self.arms, &self.config) else {
                break;
            };
            let mut next = state.clone();
            next.step(actions[index]);
            let reward = 1.0 - self.simulation.simulate(next, &mut self.rng);
            self.arms[index].add(reward);
            self.stats.playouts += 1;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        trace!(
            playouts = self.stats.playouts,
            actions = actions.len(),
            time_us = self.stats.time_us,
            "UCT search complete"
        );

        most_visited(&self.arms).map(|index| actions[index])
    }
}

impl<S, P> Strategy<S> for Uct<P>
where
    S: GameState,
    P: SimulationPolicy<S>,
{
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.search(state)
    }

    fn name(&self) -> &str {
        "uct"
    }
}
