//! Monte Carlo policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: which arm (root action or tree child) to try next
//! - `SimulationPolicy`: how to play a position out and score it

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState, WinningStatus};

use super::config::MCTSConfig;

// =============================================================================
// Arm statistics
// =============================================================================

/// Running reward of one choice, seen from the side making the choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmStats {
    /// Times this choice was tried.
    pub visits: u32,

    /// Sum of rewards in [0, 1] collected by this choice.
    pub total_reward: f64,
}

impl ArmStats {
    /// Record one more trial.
    pub fn add(&mut self, reward: f64) {
        self.visits += 1;
        self.total_reward += reward;
    }

    /// Get the mean reward (0 when never tried).
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / f64::from(self.visits)
        }
    }
}

/// Index of the first arm with the most visits.
#[must_use]
pub fn most_visited(arms: &[ArmStats]) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (i, arm) in arms.iter().enumerate() {
        if best.map_or(true, |(_, visits)| arm.visits > visits) {
            best = Some((i, arm.visits));
        }
    }
    best.map(|(i, _)| i)
}

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for choosing which arm to try next.
pub trait SelectionPolicy: Send + Sync {
    /// Select an arm index, or `None` if there are no arms.
    fn select(&self, arms: &[ArmStats], config: &MCTSConfig) -> Option<usize>;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Untried arms go first, in order. After that it picks the first arm
/// maximizing `mean + c * sqrt(ln(t) / n)`, where `t` is the total number of
/// trials across all arms.
#[derive(Clone, Debug, Default)]
pub struct UCB1;

impl SelectionPolicy for UCB1 {
    fn select(&self, arms: &[ArmStats], config: &MCTSConfig) -> Option<usize> {
        if arms.is_empty() {
            return None;
        }
        if let Some(untried) = arms.iter().position(|arm| arm.visits == 0) {
            return Some(untried);
        }

        let total: u32 = arms.iter().map(|arm| arm.visits).sum();
        let ln_total = f64::from(total).ln();

        let mut best = 0;
        let mut best_value = f64::NEG_INFINITY;
        for (i, arm) in arms.iter().enumerate() {
            let exploration =
                config.exploration_constant * (ln_total / f64::from(arm.visits)).sqrt();
            let value = arm.mean_reward() + exploration;
            if value > best_value {
                best = i;
                best_value = value;
            }
        }
        Some(best)
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Reward of a finished game for the side to move: 1 for a win, else 0.
#[must_use]
pub fn terminal_reward(status: WinningStatus) -> f64 {
    match status {
        WinningStatus::Win => 1.0,
        WinningStatus::Lose | WinningStatus::Draw | WinningStatus::None => 0.0,
    }
}

/// Policy for playing a position out to the end.
pub trait SimulationPolicy<S: GameState>: Send + Sync {
    /// Play `state` out and return the reward for its side to move.
    fn simulate(&self, state: S, rng: &mut GameRng) -> f64;
}

/// Random playout policy.
///
/// Plays uniformly random actions (passing when stuck) until the game ends.
/// Each ply flips the perspective, so a reward `r` one ply down is worth
/// `1 - r` one ply up.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlayout;

impl<S: GameState> SimulationPolicy<S> for RandomPlayout {
    fn simulate(&self, mut state: S, rng: &mut GameRng) -> f64 {
        let mut plies = 0u32;
        let reward = loop {
            let status = state.winning_status();
            if status.is_terminal() {
                break terminal_reward(status);
            }
            match rng.random_action(&state) {
                Some(action) => state.step(action),
                None => break 0.0,
            }
            plies += 1;
        };

        if plies % 2 == 0 {
            reward
        } else {
            1.0 - reward
        }
    }
}
