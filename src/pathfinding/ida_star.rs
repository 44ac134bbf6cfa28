//! Iterative-deepening A*: best-first passes under a rising f threshold.

use tracing::{debug, trace};

use super::a_star::{best_first, Pass};
use super::path::SearchPath;
use crate::core::{CostedState, Result, SearchError};

/// A path found by [`ida_star`] and the threshold of the pass that found it.
#[derive(Clone, Debug)]
pub struct IdaOutcome<S: CostedState> {
    pub path: SearchPath<S>,
    pub threshold: i32,
}

/// Run passes with thresholds 1, 2, 3, … until one reaches a goal.
///
/// A pass is abandoned as soon as any generated successor has f above the
/// threshold, and its nodes are dropped before the next pass starts. A pass
/// that does finish explores exactly like [`a_star`](super::a_star), so the
/// path lengths agree.
///
/// # Errors
///
/// `SearchError::NoPath` if `max_threshold` is passed without success, or
/// if a pass exhausts its frontier without ever hitting the threshold.
pub fn ida_star<S: CostedState>(start: &S, max_threshold: Option<i32>) -> Result<IdaOutcome<S>> {
    let cap = max_threshold.unwrap_or(i32::MAX);
    for threshold in 1..=cap {
        match best_first(start, Some(threshold)) {
            Pass::Found { path, generated } => {
                debug!(
                    length = path.len(),
                    threshold,
                    generated,
                    "IDA* found a path"
                );
                return Ok(IdaOutcome { path, threshold });
            }
            Pass::OverThreshold { f_cost } => {
                trace!(threshold, f_cost, "IDA* pass over threshold");
            }
            Pass::Exhausted => {
                return Err(SearchError::NoPath(format!(
                    "frontier exhausted under threshold {threshold}"
                )));
            }
        }
    }
    Err(SearchError::NoPath(format!("threshold cap {cap} reached")))
}
