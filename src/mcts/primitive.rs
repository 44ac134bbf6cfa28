//! Primitive Monte Carlo: round-robin playouts per root action.

use super::config::MCTSConfig;
use super::policy::{ArmStats, RandomPlayout, SimulationPolicy};
use super::stats::SearchStats;
use crate::core::{GameRng, GameState, Result};
use crate::play::Strategy;

/// Spreads playouts evenly over the root actions (trial `t` goes to action
/// `t mod n`) and picks the first action with the best win rate.
pub struct PrimitiveMonteCarlo<P = RandomPlayout> {
    config: MCTSConfig,
    rng: GameRng,
    simulation: P,
    arms: Vec<ArmStats>,
    stats: SearchStats,
}

impl PrimitiveMonteCarlo<RandomPlayout> {
    /// Primitive Monte Carlo with random playouts.
    ///
    /// The config is not checked; see [`PrimitiveMonteCarlo::try_new`].
    pub fn new(config: MCTSConfig) -> Self {
        Self::with_simulation(config, RandomPlayout)
    }

    /// Like [`PrimitiveMonteCarlo::new`], but rejects an invalid config.
    pub fn try_new(config: MCTSConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl<P> PrimitiveMonteCarlo<P> {
    /// Primitive Monte Carlo with a custom simulation policy.
    pub fn with_simulation(config: MCTSConfig, simulation: P) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            simulation,
            arms: Vec::new(),
            stats: SearchStats::default(),
        }
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
        self.stats.reset();
        let actions = state.search_actions();
        self.arms = vec![ArmStats::default(); actions.len()];
        if actions.is_empty() {
            return None;
        }

        for trial in 0..self.config.playouts as usize {
            let index = trial % actions.len();
            let mut next = state.clone();
            next.step(actions[index]);
            let reward = 1.0 - self.simulation.simulate(next, &mut self.rng);
            self.arms[index].add(reward);
            self.stats.playouts += 1;
        }

        let mut best: Option<(usize, f64)> = None;
        for (index, arm) in self.arms.iter().enumerate() {
            let mean = arm.mean_reward();
            if best.map_or(true, |(_, best_mean)| mean > best_mean) {
                best = Some((index, mean));
            }
        }
        best.map(|(index, _)| actions[index])
    }
}

impl<S, P> Strategy<S> for PrimitiveMonteCarlo<P>
where
    S: GameState,
    P: SimulationPolicy<S>,
{
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.search(state)
    }

    fn name(&self) -> &str {
        "primitive-monte-carlo"
    }
}
