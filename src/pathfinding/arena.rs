//! Parent-linked node arena for best-first search.
//!
//! Each frontier push allocates one node, so an index doubles as the
//! insertion order used to break f ties.

use super::path::SearchPath;
use crate::core::GameState;

#[derive(Clone, Debug)]
struct PathNode<S: GameState> {
    state: S,
    action: Option<S::Action>,
    parent: Option<usize>,
}

/// Every state generated by one search pass, linked back to the start.
#[derive(Clone, Debug)]
pub(crate) struct PathArena<S: GameState> {
    nodes: Vec<PathNode<S>>,
}

impl<S: GameState> PathArena<S> {
    /// Arena holding only the start state, at index 0.
    pub(crate) fn new(start: S) -> Self {
        Self {
            nodes: vec![PathNode {
                state: start,
                action: None,
                parent: None,
            }],
        }
    }

    /// Store a successor of `parent`, returning its index.
    pub(crate) fn push(&mut self, state: S, action: S::Action, parent: usize) -> usize {
        self.nodes.push(PathNode {
            state,
            action: Some(action),
            parent: Some(parent),
        });
        self.nodes.len() - 1
    }

    #[inline]
    pub(crate) fn state(&self, id: usize) -> &S {
        &self.nodes[id].state
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Path from the start to `id`.
    pub(crate) fn path_to(&self, id: usize) -> SearchPath<S> {
        let mut chain = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            chain.push(current);
            cursor = self.nodes[current].parent;
        }
        chain.reverse();

        let states = chain.iter().map(|&i| self.nodes[i].state.clone()).collect();
        let actions = chain.iter().filter_map(|&i| self.nodes[i].action).collect();
        SearchPath::new(states, actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{FifteenPuzzle, Slide};

    #[test]
    fn test_path_follows_parents() {
        let start = FifteenPuzzle::solved();
        let mut arena = PathArena::new(start.clone());

        let mut up = start.clone();
        up.step(Slide::Up);
        let a = arena.push(up.clone(), Slide::Up, 0);

        let mut side = start;
        side.step(Slide::Left);
        arena.push(side, Slide::Left, 0);

        let mut back = up;
        back.step(Slide::Left);
        let c = arena.push(back, Slide::Left, a);

        let path = arena.path_to(c);
        assert_eq!(path.actions(), &[Slide::Up, Slide::Left]);
        assert_eq!(path.states().len(), 3);
        assert_eq!(arena.len(), 4);
    }

    #[test]
    fn test_path_to_start_is_empty() {
        let arena = PathArena::new(FifteenPuzzle::solved());
        let path = arena.path_to(0);
        assert!(path.is_empty());
        assert_eq!(path.states().len(), 1);
    }
}
