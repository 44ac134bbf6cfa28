//! Start-to-goal paths returned by the pathfinding searches.

use crate::core::GameState;

/// A start-to-goal path: every visited state and the actions between them.
#[derive(Clone, Debug)]
pub struct SearchPath<S: GameState> {
    states: Vec<S>,
    actions: Vec<S::Action>,
}

impl<S: GameState> SearchPath<S> {
    pub(crate) fn new(states: Vec<S>, actions: Vec<S::Action>) -> Self {
        debug_assert_eq!(states.len(), actions.len() + 1);
        Self { states, actions }
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if the start was already a goal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// States from start to goal, both included.
    #[must_use]
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Actions in the order they are applied.
    #[must_use]
    pub fn actions(&self) -> &[S::Action] {
        &self.actions
    }

    /// First state of the path.
    #[must_use]
    pub fn start(&self) -> Option<&S> {
        self.states.first()
    }

    /// Last state of the path, a goal state.
    #[must_use]
    pub fn goal(&self) -> Option<&S> {
        self.states.last()
    }
}
