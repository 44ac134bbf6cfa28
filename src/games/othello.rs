//! 8x8 reversible-capture game on two bitboards.
//!
//! Bit 0 is a1 (top-left), bit 7 is h1, bit 63 is h8. The payload is stored
//! relative to the side to move: `player` holds the mover's discs and
//! `opponent` the other side's. `step` places a disc, flips, then swaps the
//! two boards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Evaluator, GameState, Score, ScoredState, WinningStatus};

/// A single-bit placement mask, or the empty pass move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move(pub u64);

impl Move {
    /// Pass: swap sides without placing a disc.
    pub const PASS: Move = Move(0);

    /// Check if this is the pass move.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        self.0 == 0
    }

    /// Board index (0..64) of the placed disc.
    #[must_use]
    pub fn square(self) -> Option<u32> {
        (!self.is_pass()).then(|| self.0.trailing_zeros())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.square() {
            None => write!(f, "pass"),
            Some(sq) => {
                let file = (b'a' + (sq % 8) as u8) as char;
                write!(f, "{}{}", file, sq / 8 + 1)
            }
        }
    }
}

const NOT_EDGE_FILES: u64 = 0x7e7e_7e7e_7e7e_7e7e;
const NOT_EDGE_RANKS: u64 = 0x00ff_ffff_ffff_ff00;
const NOT_EDGE_RING: u64 = 0x007e_7e7e_7e7e_7e00;

/// (shift, mask) per direction. Positive shifts move towards bit 0.
const DIRECTIONS: [(i32, u64); 8] = [
    (1, NOT_EDGE_FILES),
    (-1, NOT_EDGE_FILES),
    (8, NOT_EDGE_RANKS),
    (-8, NOT_EDGE_RANKS),
    (9, NOT_EDGE_RING),
    (7, NOT_EDGE_RING),
    (-7, NOT_EDGE_RING),
    (-9, NOT_EDGE_RING),
];

#[inline]
fn shift(bits: u64, amount: i32) -> u64 {
    if amount > 0 {
        bits >> amount
    } else {
        bits << -amount
    }
}

/// Opponent discs in an unbroken run starting next to `origin`.
#[inline]
fn run_from(origin: u64, opponent: u64, amount: i32, mask: u64) -> u64 {
    let masked = opponent & mask;
    let mut run = masked & shift(origin, amount);
    for _ in 0..5 {
        run |= masked & shift(run, amount);
    }
    run
}

/// Empty squares where `player` can flank at least one `opponent` disc.
fn placeable(player: u64, opponent: u64) -> u64 {
    let empty = !(player | opponent);
    DIRECTIONS
        .iter()
        .fold(0, |acc, &(amount, mask)| {
            acc | shift(run_from(player, opponent, amount, mask), amount)
        })
        & empty
}

/// Othello position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Othello {
    turn: u32,
    is_black_turn: bool,
    player: u64,
    opponent: u64,
}

impl Default for Othello {
    fn default() -> Self {
        Self::new()
    }
}

impl Othello {
    /// Standard opening position, black to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            turn: 0,
            is_black_turn: true,
            player: 0x0000_0008_1000_0000,
            opponent: 0x0000_0010_0800_0000,
        }
    }

    /// Position from explicit mover/opponent bitboards, black to move.
    ///
    /// Overlapping bits are dropped from `opponent`.
    #[must_use]
    pub fn from_bitboards(player: u64, opponent: u64) -> Self {
        Self {
            turn: 0,
            is_black_turn: true,
            player,
            opponent: opponent & !player,
        }
    }

    /// Discs of the side to move.
    #[must_use]
    pub fn player_bits(&self) -> u64 {
        self.player
    }

    /// Discs of the side that just moved.
    #[must_use]
    pub fn opponent_bits(&self) -> u64 {
        self.opponent
    }

    /// Whether black is the side to move.
    #[must_use]
    pub fn is_black_turn(&self) -> bool {
        self.is_black_turn
    }

    /// Disc counts as (black, white).
    #[must_use]
    pub fn disc_counts(&self) -> (u32, u32) {
        let (black, white) = self.colored_bits();
        (black.count_ones(), white.count_ones())
    }

    fn colored_bits(&self) -> (u64, u64) {
        if self.is_black_turn {
            (self.player, self.opponent)
        } else {
            (self.opponent, self.player)
        }
    }

    fn place(&mut self, disc: u64) {
        let flips = DIRECTIONS.iter().fold(0, |acc, &(amount, mask)| {
            let run = run_from(disc, self.opponent, amount, mask);
            if shift(run, amount) & self.player != 0 {
                acc | run
            } else {
                acc
            }
        });
        self.player ^= disc | flips;
        self.opponent ^= flips;
    }
}

impl GameState for Othello {
    type Action = Move;

    const PASS: Option<Move> = Some(Move::PASS);

    fn step(&mut self, action: Move) {
        if !action.is_pass() {
            self.place(action.0);
        }
        std::mem::swap(&mut self.player, &mut self.opponent);
        self.turn += 1;
        self.is_black_turn = !self.is_black_turn;
    }

    fn legal_actions(&self) -> Vec<Move> {
        let mut cells = placeable(self.player, self.opponent);
        let mut actions = Vec::with_capacity(cells.count_ones() as usize);
        while cells != 0 {
            let lowest = cells & cells.wrapping_neg();
            actions.push(Move(lowest));
            cells ^= lowest;
        }
        actions
    }

    /// Over once neither side can place a disc.
    fn is_done(&self) -> bool {
        placeable(self.player, self.opponent) == 0 && placeable(self.opponent, self.player) == 0
    }

    fn winning_status(&self) -> WinningStatus {
        if !self.is_done() {
            return WinningStatus::None;
        }
        let mine = self.player.count_ones();
        let theirs = self.opponent.count_ones();
        match mine.cmp(&theirs) {
            std::cmp::Ordering::Greater => WinningStatus::Win,
            std::cmp::Ordering::Less => WinningStatus::Lose,
            std::cmp::Ordering::Equal => WinningStatus::Draw,
        }
    }

    fn turn(&self) -> u32 {
        self.turn
    }
}

impl ScoredState for Othello {
    /// Disc count difference.
    fn score(&self) -> Score {
        self.player.count_ones() as Score - self.opponent.count_ones() as Score
    }
}

/// Positional evaluation: each occupied square is worth a fixed weight,
/// corners high, squares next to corners negative.
#[derive(Clone, Copy, Debug, Default)]
pub struct CellWeights;

impl CellWeights {
    const WEIGHTS: [(u64, Score); 8] = [
        (0x8100_0000_0000_0081, 120),
        (0x2400_8100_0081_0024, 20),
        (0x0000_2400_0024_0000, 15),
        (0x1800_0081_8100_0018, 5),
        (0x0000_183c_3c18_0000, 3),
        (0x003c_4242_4242_3c00, -5),
        (0x4281_0000_0000_8142, -20),
        (0x0042_0000_0000_4200, -40),
    ];

    /// Sum of the weights of the squares occupied in `bits`.
    #[must_use]
    pub fn weigh(bits: u64) -> Score {
        Self::WEIGHTS
            .iter()
            .map(|&(cells, weight)| weight * (bits & cells).count_ones() as Score)
            .sum()
    }
}

impl Evaluator<Othello> for CellWeights {
    fn evaluate(&self, state: &Othello) -> Score {
        Self::weigh(state.player) - Self::weigh(state.opponent)
    }
}

impl fmt::Display for Othello {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (black, white) = self.colored_bits();
        writeln!(f, "Turn\t{}", self.turn)?;
        writeln!(f, "Black\t{}\tWhite\t{}", black.count_ones(), white.count_ones())?;
        for row in 0..8 {
            let line: Vec<&str> = (0..8)
                .map(|col| {
                    let bit = 1u64 << (row * 8 + col);
                    if black & bit != 0 {
                        "x"
                    } else if white & bit != 0 {
                        "o"
                    } else {
                        "."
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
