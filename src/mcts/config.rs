//! Monte Carlo search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::{Result, SearchError};

/// Configuration shared by the Monte Carlo searches.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// UCB1 exploration constant (default: 1.0).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Playouts per decision.
    pub playouts: u32,

    /// Visits a leaf needs before it is expanded (progressive tree only).
    pub expansion_threshold: u32,

    /// Maximum nodes to allocate in the tree.
    /// Leaves stop expanding once the cap is reached.
    pub max_nodes: usize,

    /// Random seed for playouts.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            exploration_constant: 1.0,
            playouts: 500,
            expansion_threshold: 10,
            max_nodes: 100_000,
            seed: 42,
        }
    }
}

impl MCTSConfig {
    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom playout count.
    pub fn with_playouts(mut self, playouts: u32) -> Self {
        self.playouts = playouts;
        self
    }

    /// Create a new config with custom expansion threshold.
    pub fn with_expansion_threshold(mut self, threshold: u32) -> Self {
        self.expansion_threshold = threshold;
        self
    }

    /// Create a new config with custom node cap.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the parameters are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "exploration_constant must be finite and non-negative, got {}",
                self.exploration_constant
            )));
        }
        if self.playouts == 0 {
            return Err(SearchError::InvalidConfig(
                "playouts must be positive".to_string(),
            ));
        }
        if self.max_nodes == 0 {
            return Err(SearchError::InvalidConfig(
                "max_nodes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MCTSConfig::default();
        assert_eq!(config.exploration_constant, 1.0);
        assert_eq!(config.expansion_threshold, 10);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MCTSConfig::default()
            .with_exploration(2.0)
            .with_seed(123)
            .with_playouts(50)
            .with_expansion_threshold(3)
            .with_max_nodes(64);

        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.seed, 123);
        assert_eq!(config.playouts, 50);
        assert_eq!(config.expansion_threshold, 3);
        assert_eq!(config.max_nodes, 64);
    }

    #[test]
    fn test_validate() {
        assert!(MCTSConfig::default().with_playouts(0).validate().is_err());
        assert!(MCTSConfig::default().with_max_nodes(0).validate().is_err());
        assert!(MCTSConfig::default().with_exploration(-1.0).validate().is_err());
        assert!(MCTSConfig::default().with_exploration(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = MCTSConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MCTSConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.seed, deserialized.seed);
        assert_eq!(config.playouts, deserialized.playouts);
    }
}
