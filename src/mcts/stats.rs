//! Monte Carlo search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Playouts run to a terminal state.
    pub playouts: u32,

    /// Nodes added to the tree (progressive tree only).
    pub nodes_expanded: u32,

    /// Deepest node reached (progressive tree only).
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate playouts per second.
    #[must_use]
    pub fn playouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.playouts) / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
