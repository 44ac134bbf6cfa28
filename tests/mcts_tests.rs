//! Monte Carlo search integration tests on Othello and tic-tac-toe.

use rust_search::core::{GameState, SearchError};
use rust_search::games::{Cell, Othello, TicTacToe};
use rust_search::mcts::{MCTSConfig, MCTSSearch, PrimitiveMonteCarlo, Uct};
use rust_search::play::Strategy;

fn one_move_from_win() -> TicTacToe {
    let mut state = TicTacToe::new();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        state.step(Cell::at(row, col));
    }
    state
}

// =============================================================================
// Basic Search Tests
// =============================================================================

#[test]
fn test_every_search_returns_legal_action() {
    let state = Othello::new();
    let legal = state.legal_actions();
    let config = MCTSConfig::default().with_playouts(100);

    let mut searches: Vec<Box<dyn Strategy<Othello>>> = vec![
        Box::new(PrimitiveMonteCarlo::new(config.clone())),
        Box::new(Uct::new(config.clone())),
        Box::new(MCTSSearch::new(config)),
    ];
    for search in &mut searches {
        let action = search.choose_action(&state);
        assert!(
            action.is_some_and(|a| legal.contains(&a)),
            "{} returned {:?}",
            search.name(),
            action
        );
    }
}

#[test]
fn test_every_search_takes_immediate_win() {
    let state = one_move_from_win();
    let config = MCTSConfig::default().with_playouts(1_000).with_seed(3);

    assert_eq!(
        PrimitiveMonteCarlo::new(config.clone()).search(&state),
        Some(Cell::at(0, 2))
    );
    assert_eq!(Uct::new(config.clone()).search(&state), Some(Cell::at(0, 2)));
    assert_eq!(MCTSSearch::new(config).search(&state), Some(Cell::at(0, 2)));
}

#[test]
fn test_uct_tries_every_root_action() {
    let state = Othello::new();
    let mut uct = Uct::new(MCTSConfig::default().with_playouts(100));
    uct.search(&state);

    assert_eq!(uct.arms().len(), state.legal_actions().len());
    assert!(uct.arms().iter().all(|arm| arm.visits >= 1));
}

#[test]
fn test_stuck_position_passes() {
    // Side to move has no placement, the opponent still does.
    let state = Othello::from_bitboards(0x2, 0x1);
    assert!(state.legal_actions().is_empty());
    assert!(!state.is_done());

    let config = MCTSConfig::default().with_playouts(50);
    assert_eq!(Uct::new(config.clone()).search(&state), Othello::PASS);
    assert_eq!(
        PrimitiveMonteCarlo::new(config.clone()).search(&state),
        Othello::PASS
    );
    assert_eq!(MCTSSearch::new(config).search(&state), Othello::PASS);
}

// =============================================================================
// Tree Tests
// =============================================================================

#[test]
fn test_tree_grows_past_root() {
    let mut search = MCTSSearch::new(MCTSConfig::default().with_playouts(2_000));
    search.search(&Othello::new());

    let tree = search.tree().unwrap();
    let stats = tree.stats();
    assert!(stats.node_count > 5);
    assert!(stats.max_depth >= 2);
    assert!(stats.branching_factor() > 1.0);
    assert_eq!(
        search.stats().nodes_expanded as usize + 1,
        stats.node_count
    );
}

#[test]
fn test_lower_threshold_expands_more() {
    let state = Othello::new();
    let config = MCTSConfig::default().with_playouts(1_000);

    let mut eager = MCTSSearch::new(config.clone().with_expansion_threshold(1));
    let mut lazy = MCTSSearch::new(config.with_expansion_threshold(50));
    eager.search(&state);
    lazy.search(&state);

    assert!(eager.tree().unwrap().len() > lazy.tree().unwrap().len());
}

// =============================================================================
// Determinism / Config Tests
// =============================================================================

#[test]
fn test_deterministic_with_seed() {
    let state = Othello::new();
    let config = MCTSConfig::default().with_playouts(300).with_seed(12345);

    let mut uct1 = Uct::new(config.clone());
    let mut uct2 = Uct::new(config.clone());
    assert_eq!(uct1.search(&state), uct2.search(&state));
    assert_eq!(uct1.arms(), uct2.arms());

    let mut tree1 = MCTSSearch::new(config.clone());
    let mut tree2 = MCTSSearch::new(config);
    assert_eq!(tree1.search(&state), tree2.search(&state));
    assert_eq!(tree1.action_visits(), tree2.action_visits());
}

#[test]
fn test_config_serde_and_validation() {
    let config = MCTSConfig::default()
        .with_exploration(1.5)
        .with_playouts(64)
        .with_seed(9);
    let json = serde_json::to_string(&config).unwrap();
    let back: MCTSConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.playouts, 64);
    assert_eq!(back.seed, 9);
    assert!(back.validate().is_ok());

    let bad = MCTSConfig::default().with_playouts(0);
    assert!(matches!(bad.validate(), Err(SearchError::InvalidConfig(_))));
}
