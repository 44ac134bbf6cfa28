//! Score-based search integration tests on Othello and tic-tac-toe.

use rust_search::core::{GameRng, GameState, ScoredState, WinningStatus, INF};
use rust_search::games::{Cell, CellWeights, Othello, TicTacToe};
use rust_search::heuristic::{AlphaBeta, DeepeningConfig, IterativeDeepening, MiniMax};
use rust_search::play::Strategy;

fn random_othello(seed: u64, plies: usize) -> Othello {
    let mut rng = GameRng::new(seed);
    let mut state = Othello::new();
    for _ in 0..plies {
        if state.is_done() {
            break;
        }
        if let Some(action) = rng.random_action(&state) {
            state.step(action);
        }
    }
    state
}

fn tictactoe(cells: &[(u16, u16)]) -> TicTacToe {
    let mut state = TicTacToe::new();
    for &(row, col) in cells {
        state.step(Cell::at(row, col));
    }
    state
}

// =============================================================================
// Minimax / Alpha-Beta
// =============================================================================

#[test]
fn test_minimax_takes_immediate_win() {
    let state = tictactoe(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
    let (action, score) = MiniMax::new(1).search(&state).unwrap();
    assert_eq!(action, Cell::at(0, 2));
    assert_eq!(score, 1);
}

#[test]
fn test_alpha_beta_matches_minimax_on_midgame_positions() {
    for seed in 0..8 {
        let state = random_othello(seed, 20);
        for depth in 1..=3 {
            assert_eq!(
                AlphaBeta::new(depth).search(&state),
                MiniMax::new(depth).search(&state),
                "seed {} depth {}",
                seed,
                depth
            );
        }
    }
}

#[test]
fn test_alpha_beta_full_window_value() {
    let state = random_othello(3, 12);
    let search = AlphaBeta::new(3);
    assert_eq!(
        search.value(&state, -INF, INF, 3),
        MiniMax::new(3).value(&state, 3)
    );
}

#[test]
fn test_cell_weights_evaluator_is_used() {
    let state = random_othello(9, 16);
    let weighted = AlphaBeta::with_evaluator(2, CellWeights).search(&state);
    let plain = MiniMax::with_evaluator(2, CellWeights).search(&state);
    assert_eq!(weighted, plain);
}

#[test]
fn test_terminal_status_agrees_with_score() {
    let mut rng = GameRng::new(21);
    for _ in 0..20 {
        let mut state = Othello::new();
        while !state.is_done() {
            match rng.random_action(&state) {
                Some(action) => state.step(action),
                None => break,
            }
        }
        let score = state.score();
        match state.winning_status() {
            WinningStatus::Win => assert!(score > 0),
            WinningStatus::Lose => assert!(score < 0),
            WinningStatus::Draw => assert_eq!(score, 0),
            WinningStatus::None => panic!("finished game without a result"),
        }
    }
}

// =============================================================================
// Iterative Deepening
// =============================================================================

#[test]
fn test_deepening_with_cap_equals_alpha_beta() {
    let state = random_othello(4, 10);
    let config = DeepeningConfig::default()
        .with_time_limit(60_000)
        .with_max_depth(3);
    let outcome = IterativeDeepening::new(config).search(&state).unwrap();

    assert_eq!(outcome.completed_depth, 3);
    let (action, score) = AlphaBeta::new(3).search(&state).unwrap();
    assert_eq!(outcome.action, action);
    assert_eq!(outcome.score, score);
}

#[test]
fn test_deepening_answer_comes_from_last_completed_depth() {
    let state = random_othello(12, 24);
    let deepening = IterativeDeepening::new(DeepeningConfig::default().with_time_limit(20));
    let outcome = deepening.search(&state).unwrap();

    assert!(outcome.completed_depth >= 1);
    let (action, score) = AlphaBeta::new(outcome.completed_depth)
        .search(&state)
        .unwrap();
    assert_eq!(outcome.action, action);
    assert_eq!(outcome.score, score);
}

#[test]
fn test_deepening_without_completed_depth_falls_back() {
    let state = random_othello(5, 14);
    // Over before depth 1 can finish.
    let config = DeepeningConfig {
        time_limit_ms: 0,
        max_depth: None,
    };
    let mut deepening = IterativeDeepening::new(config);

    assert!(deepening.search(&state).is_none());
    assert_eq!(
        deepening.choose_action(&state),
        state.search_actions().first().copied()
    );
}

#[test]
fn test_deepening_strategy_always_answers() {
    let mut deepening = IterativeDeepening::new(DeepeningConfig::default().with_time_limit(1));
    let state = Othello::new();
    let action = deepening.choose_action(&state);
    assert!(action.is_some());
    assert!(state.legal_actions().contains(&action.unwrap()));
}

#[test]
fn test_deepening_config_serde() {
    let config = DeepeningConfig::default()
        .with_time_limit(250)
        .with_max_depth(6);
    let json = serde_json::to_string(&config).unwrap();
    let back: DeepeningConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
    assert!(back.validate().is_ok());
}
