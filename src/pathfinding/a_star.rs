//! Best-first search ordered by f = g + h.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::arena::PathArena;
use super::path::SearchPath;
use crate::core::{CostedState, Result, SearchError};

/// How one best-first pass ended.
pub(crate) enum Pass<S: CostedState> {
    /// A goal state reached the top of the frontier.
    Found { path: SearchPath<S>, generated: usize },
    /// Nothing left to expand.
    Exhausted,
    /// A successor's f went over the threshold.
    OverThreshold { f_cost: i32 },
}

/// One best-first pass from `start`.
///
/// Frontier entries are `(f, arena index)`, so equal f pops in insertion
/// order. An entry whose f no longer matches the recorded cost for its hash
/// is stale and skipped. With a threshold, the first successor over it ends
/// the whole pass.
pub(crate) fn best_first<S: CostedState>(start: &S, threshold: Option<i32>) -> Pass<S> {
    let mut arena = PathArena::new(start.clone());
    let mut frontier = BinaryHeap::new();
    let mut costs: FxHashMap<u64, i32> = FxHashMap::default();
    let mut explored: FxHashSet<u64> = FxHashSet::default();

    costs.insert(start.hash_value(), start.f_cost());
    frontier.push(Reverse((start.f_cost(), 0usize)));

    while let Some(&Reverse((f_cost, current))) = frontier.peek() {
        if arena.state(current).is_done() {
            return Pass::Found {
                path: arena.path_to(current),
                generated: arena.len(),
            };
        }
        frontier.pop();

        let state = arena.state(current).clone();
        let hash = state.hash_value();
        if costs.get(&hash) != Some(&f_cost) {
            continue;
        }
        explored.insert(hash);

        for action in state.legal_actions() {
            let mut next = state.clone();
            next.step(action);
            let next_hash = next.hash_value();
            if explored.contains(&next_hash) {
                continue;
            }

            let next_f = next.f_cost();
            if threshold.is_some_and(|limit| next_f > limit) {
                return Pass::OverThreshold { f_cost: next_f };
            }
            if costs.get(&next_hash).is_some_and(|&known| known <= next_f) {
                continue;
            }

            costs.insert(next_hash, next_f);
            let id = arena.push(next, action, current);
            frontier.push(Reverse((next_f, id)));
        }
    }
    Pass::Exhausted
}

/// Shortest path from `start` to the first goal state.
///
/// Optimal as long as the heuristic is consistent, which Manhattan
/// distance on the fifteen puzzle is.
///
/// # Errors
///
/// `SearchError::NoPath` if every reachable state is explored without
/// finding a goal.
pub fn a_star<S: CostedState>(start: &S) -> Result<SearchPath<S>> {
    match best_first(start, None) {
        Pass::Found { path, generated } => {
            debug!(length = path.len(), generated, "A* found a path");
            Ok(path)
        }
        Pass::Exhausted | Pass::OverThreshold { .. } => {
            Err(SearchError::NoPath("frontier exhausted".to_string()))
        }
    }
}
