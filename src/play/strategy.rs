//! The move-choosing interface shared by every search algorithm.

use crate::core::{GameRng, GameState};

/// Something that picks an action for the side to move.
///
/// Implementations may keep internal search state (a transposition table, a
/// random source) between calls, hence `&mut self`. They never modify the
/// position they are given.
pub trait Strategy<S: GameState> {
    /// Pick an action for the side to move.
    ///
    /// Returns `None` when there is no action to take. Callers fall back to
    /// `S::PASS` in that case.
    fn choose_action(&mut self, state: &S) -> Option<S::Action>;

    /// Short name used in logs and match reports.
    fn name(&self) -> &str;
}

impl<S: GameState, T: Strategy<S> + ?Sized> Strategy<S> for Box<T> {
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        (**self).choose_action(state)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Uniformly random legal action, `PASS` when stuck.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Random player seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<S: GameState> Strategy<S> for RandomStrategy {
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.rng.random_action(state)
    }

    fn name(&self) -> &str {
        "random"
    }
}
