//! 4x4 sliding-tile puzzle with g/h cost tracking.
//!
//! Goal layout (0 is the blank):
//!
//! ```text
//!  1 |  2 |  3 |  4
//!  5 |  6 |  7 |  8
//!  9 | 10 | 11 | 12
//! 13 | 14 | 15 |  0
//! ```
//!
//! Cells are numbered 0..16 left to right, top to bottom. The heuristic is
//! the sum of Manhattan distances of tiles 1..=15 to their goal cells, which
//! never overestimates the number of remaining slides.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::zobrist::key_table;
use crate::core::{
    CostedState, GameRng, GameState, HashedState, Result, SearchError, WinningStatus,
};

const CELLS: usize = 16;
const ZOBRIST_SEED: u64 = 0x15_0f_f5e7_2a11_d00d;

/// Keys indexed by [tile][cell]. Row 0 (the blank) is never used.
fn zobrist_keys() -> &'static [[u64; CELLS]; CELLS] {
    static KEYS: OnceLock<[[u64; CELLS]; CELLS]> = OnceLock::new();
    KEYS.get_or_init(|| key_table(ZOBRIST_SEED))
}

/// Goal cell of a tile.
#[inline]
const fn goal_cell(tile: u8) -> usize {
    if tile == 0 {
        CELLS - 1
    } else {
        tile as usize - 1
    }
}

#[inline]
const fn manhattan(a: usize, b: usize) -> i32 {
    let (ar, ac) = ((a / 4) as i32, (a % 4) as i32);
    let (br, bc) = ((b / 4) as i32, (b % 4) as i32);
    (ar - br).abs() + (ac - bc).abs()
}

/// Direction the blank moves in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slide {
    Left,
    Right,
    Up,
    Down,
}

impl Slide {
    /// All directions, in legal-action order.
    pub const ALL: [Slide; 4] = [Slide::Left, Slide::Right, Slide::Up, Slide::Down];

    /// Direction index (0: left, 1: right, 2: up, 3: down).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The slide that undoes this one.
    #[must_use]
    pub const fn reverse(self) -> Slide {
        match self {
            Slide::Left => Slide::Right,
            Slide::Right => Slide::Left,
            Slide::Up => Slide::Down,
            Slide::Down => Slide::Up,
        }
    }

    const fn offset(self) -> isize {
        match self {
            Slide::Left => -1,
            Slide::Right => 1,
            Slide::Up => -4,
            Slide::Down => 4,
        }
    }
}

/// Fifteen-puzzle position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FifteenPuzzle {
    turn: u32,
    g_cost: i32,
    h_cost: i32,
    hash: u64,
    blank: u8,
    /// Tile number per cell.
    board: [u8; CELLS],
}

impl Default for FifteenPuzzle {
    fn default() -> Self {
        Self::solved()
    }
}

impl FifteenPuzzle {
    /// The goal layout.
    #[must_use]
    pub fn solved() -> Self {
        let mut board = [0u8; CELLS];
        for tile in 1..CELLS as u8 {
            board[goal_cell(tile)] = tile;
        }
        Self::from_board(board, (CELLS - 1) as u8)
    }

    /// Layout from tile numbers listed cell by cell.
    ///
    /// Rejects anything that is not a permutation of 0..16 and layouts that
    /// cannot reach the goal.
    pub fn from_tiles(tiles: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or_else(|| SearchError::InvalidTiles(format!("tile {} out of range", tile)))?;
            if *slot {
                return Err(SearchError::InvalidTiles(format!("tile {} repeated", tile)));
            }
            *slot = true;
        }

        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .ok_or_else(|| SearchError::InvalidTiles("missing blank".to_string()))?;

        if !Self::is_solvable(&tiles, blank) {
            return Err(SearchError::Unsolvable);
        }

        Ok(Self::from_board(tiles, blank as u8))
    }

    /// Goal layout scrambled by `slides` random blank moves.
    ///
    /// Always solvable. Turn and path cost restart at zero.
    #[must_use]
    pub fn scrambled(slides: usize, rng: &mut GameRng) -> Self {
        let mut state = Self::solved();
        for _ in 0..slides {
            if let Some(&slide) = rng.choose(&state.legal_actions()) {
                state.step(slide);
            }
        }
        state.turn = 0;
        state.g_cost = 0;
        state
    }

    /// Goal layout scrambled by 100 to 149 random slides.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        let slides = 100 + rng.gen_range_usize(0..50);
        Self::scrambled(slides, rng)
    }

    /// Tile numbers cell by cell.
    #[must_use]
    pub fn tiles(&self) -> [u8; CELLS] {
        self.board
    }

    fn from_board(board: [u8; CELLS], blank: u8) -> Self {
        let keys = zobrist_keys();
        let mut hash = 0;
        let mut h_cost = 0;
        for (cell, &tile) in board.iter().enumerate() {
            if tile != 0 {
                hash ^= keys[tile as usize][cell];
                h_cost += manhattan(cell, goal_cell(tile));
            }
        }
        Self {
            turn: 0,
            g_cost: 0,
            h_cost,
            hash,
            blank,
            board,
        }
    }

    /// Width-4 parity rule: solvable iff inversions plus the blank's row
    /// counted from the bottom (1-based) is odd.
    fn is_solvable(tiles: &[u8; CELLS], blank: usize) -> bool {
        let numbered: Vec<u8> = tiles.iter().copied().filter(|&t| t != 0).collect();
        let inversions: usize = numbered
            .iter()
            .enumerate()
            .map(|(i, &a)| numbered[i + 1..].iter().filter(|&&b| b < a).count())
            .sum();
        let row_from_bottom = 4 - blank / 4;
        (inversions + row_from_bottom) % 2 == 1
    }
}

impl GameState for FifteenPuzzle {
    type Action = Slide;

    fn step(&mut self, action: Slide) {
        let from = self.blank as usize;
        let to = (from as isize + action.offset()) as usize;
        let tile = self.board[to];

        let keys = zobrist_keys();
        self.hash ^= keys[tile as usize][to] ^ keys[tile as usize][from];
        self.h_cost += manhattan(from, goal_cell(tile)) - manhattan(to, goal_cell(tile));

        self.board[from] = tile;
        self.board[to] = 0;
        self.blank = to as u8;

        self.turn += 1;
        self.g_cost += 1;
    }

    fn legal_actions(&self) -> Vec<Slide> {
        let (row, col) = (self.blank / 4, self.blank % 4);
        Slide::ALL
            .into_iter()
            .filter(|slide| match slide {
                Slide::Left => col != 0,
                Slide::Right => col != 3,
                Slide::Up => row != 0,
                Slide::Down => row != 3,
            })
            .collect()
    }

    /// Solved once every tile is home.
    fn is_done(&self) -> bool {
        self.h_cost == 0
    }

    fn winning_status(&self) -> WinningStatus {
        if self.is_done() {
            WinningStatus::Win
        } else {
            WinningStatus::None
        }
    }

    fn turn(&self) -> u32 {
        self.turn
    }
}

impl HashedState for FifteenPuzzle {
    fn hash_value(&self) -> u64 {
        self.hash
    }
}

impl CostedState for FifteenPuzzle {
    fn path_cost(&self) -> i32 {
        self.g_cost
    }

    fn heuristic_cost(&self) -> i32 {
        self.h_cost
    }
}

impl fmt::Display for FifteenPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Turn\t{}\tg cost\t{}\th cost\t{}\tf cost\t{}",
            self.turn,
            self.g_cost,
            self.h_cost,
            self.f_cost()
        )?;
        for (row, chunk) in self.board.chunks(4).enumerate() {
            if row > 0 {
                writeln!(f, "-- + -- + -- + --")?;
            }
            let line: Vec<String> = chunk.iter().map(|tile| format!("{:>2}", tile)).collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}
