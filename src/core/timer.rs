//! Wall-clock budget for anytime searches.

use std::time::{Duration, Instant};

/// Tracks elapsed time against a fixed budget.
///
/// Checks are cooperative: searches poll `is_time_over` at node boundaries,
/// nothing is interrupted preemptively.
#[derive(Clone, Copy, Debug)]
pub struct TimeKeeper {
    start: Instant,
    budget: Duration,
}

impl TimeKeeper {
    /// Start a budget of `budget_ms` milliseconds from now.
    #[must_use]
    pub fn new(budget_ms: u64) -> Self {
        Self {
            start: Instant::now(),
            budget: Duration::from_millis(budget_ms),
        }
    }

    /// Check whether the budget is used up.
    #[inline]
    #[must_use]
    pub fn is_time_over(&self) -> bool {
        self.start.elapsed() >= self.budget
    }

    /// Time spent since the budget started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
