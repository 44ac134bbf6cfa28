//! Error type for the fallible edges of the crate.
//!
//! Search loops themselves never fail: running out of actions, time or
//! threshold are encoded as return values. Errors cover bad input
//! (configuration, puzzle layouts) and outcomes a caller must handle.

use thiserror::Error;

/// Errors reported by configuration, model construction and drivers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid tile layout: {0}")]
    InvalidTiles(String),

    #[error("Puzzle layout is not solvable")]
    Unsolvable,

    #[error("No path to a goal state: {0}")]
    NoPath(String),

    #[error("No legal action at turn {turn}")]
    NoLegalAction { turn: u32 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SearchError::InvalidConfig("playouts must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid configuration: playouts must be positive");

        let err = SearchError::NoLegalAction { turn: 7 };
        assert_eq!(err.to_string(), "No legal action at turn 7");
    }
}
