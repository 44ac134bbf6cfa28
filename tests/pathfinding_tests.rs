//! A* and IDA* integration tests on the fifteen puzzle.

use rust_search::core::{CostedState, GameRng, GameState, HashedState, SearchError};
use rust_search::games::{FifteenPuzzle, Slide};
use rust_search::pathfinding::{a_star, ida_star};

fn replay(start: &FifteenPuzzle, actions: &[Slide]) -> FifteenPuzzle {
    let mut state = start.clone();
    for &action in actions {
        assert!(state.legal_actions().contains(&action));
        state.step(action);
    }
    state
}

// =============================================================================
// Path Quality
// =============================================================================

#[test]
fn test_a_star_and_ida_star_agree() {
    let mut rng = GameRng::new(2024);
    for slides in [12, 14, 16] {
        let start = FifteenPuzzle::scrambled(slides, &mut rng);
        let by_a_star = a_star(&start).unwrap();
        let by_ida = ida_star(&start, None).unwrap();
        assert_eq!(by_a_star.len(), by_ida.path.len(), "{} slides", slides);
    }
}

#[test]
fn test_replaying_path_reaches_goal() {
    let mut rng = GameRng::new(77);
    let start = FifteenPuzzle::scrambled(14, &mut rng);
    let path = a_star(&start).unwrap();

    let end = replay(&start, path.actions());
    assert!(end.is_done());
    assert_eq!(end.hash_value(), FifteenPuzzle::solved().hash_value());
    assert_eq!(end.path_cost(), path.len() as i32);
}

#[test]
fn test_path_states_follow_actions() {
    let mut rng = GameRng::new(8);
    let start = FifteenPuzzle::scrambled(10, &mut rng);
    let outcome = ida_star(&start, None).unwrap();
    let path = &outcome.path;

    assert_eq!(path.states().len(), path.len() + 1);
    assert_eq!(path.start().unwrap().tiles(), start.tiles());
    for (i, &action) in path.actions().iter().enumerate() {
        let mut expected = path.states()[i].clone();
        expected.step(action);
        assert_eq!(expected.tiles(), path.states()[i + 1].tiles());
    }
}

#[test]
fn test_heuristic_is_lower_bound() {
    let mut rng = GameRng::new(31);
    for _ in 0..5 {
        let start = FifteenPuzzle::scrambled(12, &mut rng);
        let path = a_star(&start).unwrap();
        assert!(start.heuristic_cost() <= path.len() as i32);
    }
}

// =============================================================================
// Layout Errors
// =============================================================================

#[test]
fn test_swapped_tiles_rejected() {
    let mut tiles = FifteenPuzzle::solved().tiles();
    tiles.swap(13, 14);
    assert_eq!(
        FifteenPuzzle::from_tiles(tiles).unwrap_err(),
        SearchError::Unsolvable
    );
}

#[test]
fn test_known_layout_solves() {
    let tiles = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15];
    let start = FifteenPuzzle::from_tiles(tiles).unwrap();
    let path = a_star(&start).unwrap();
    assert_eq!(path.actions(), &[Slide::Right]);
}
