//! Full-game driver and match tallies.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::strategy::Strategy;
use crate::core::{GameState, Result, SearchError, WinningStatus};

/// Outcome of one game, per seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Result for seat 0 and seat 1.
    pub statuses: [WinningStatus; 2],

    /// Number of actions applied, passes included.
    pub plies: u32,
}

/// Play one game from `initial` to the end.
///
/// `first` is the seat (0 or 1) that moves first. When a strategy returns no
/// action, `S::PASS` is played instead; if there is none the game cannot
/// continue and `SearchError::NoLegalAction` is returned.
pub fn play_game<S: GameState>(
    initial: &S,
    mut seats: [&mut dyn Strategy<S>; 2],
    first: usize,
) -> Result<GameRecord> {
    let mut state = initial.clone();
    let mut seat = first % 2;
    let mut plies = 0;

    while !state.is_done() {
        let action = seats[seat]
            .choose_action(&state)
            .or(S::PASS)
            .ok_or(SearchError::NoLegalAction { turn: state.turn() })?;
        trace!(turn = state.turn(), seat, action = ?action, "Action played");
        state.step(action);
        seat = 1 - seat;
        plies += 1;
    }

    // `seat` is now the side to move in the final position.
    let status = state.winning_status();
    let mut statuses = [WinningStatus::Draw; 2];
    statuses[seat] = status;
    statuses[1 - seat] = status.flipped();

    Ok(GameRecord { statuses, plies })
}

/// Win/lose/draw counts from the first strategy's point of view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchStats {
    /// Games played.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Fraction of games won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(games)
        }
    }

    /// Add one game's result.
    pub fn record(&mut self, status: WinningStatus) {
        match status {
            WinningStatus::Win => self.wins += 1,
            WinningStatus::Lose => self.losses += 1,
            WinningStatus::Draw | WinningStatus::None => self.draws += 1,
        }
    }
}

/// Play `games` games between `first` and `second`.
///
/// The first mover alternates: `first` opens even-numbered games and
/// `second` opens odd-numbered ones.
pub fn run_match<S, A, B>(
    initial: &S,
    first: &mut A,
    second: &mut B,
    games: u32,
) -> Result<MatchStats>
where
    S: GameState,
    A: Strategy<S>,
    B: Strategy<S>,
{
    let mut stats = MatchStats::default();
    for game in 0..games {
        let opener = (game & 1) as usize;
        let record = play_game(initial, [&mut *first, &mut *second], opener)?;
        debug!(
            game,
            opener,
            plies = record.plies,
            result = ?record.statuses[0],
            "Game finished"
        );
        stats.record(record.statuses[0]);
    }

    info!(
        first = first.name(),
        second = second.name(),
        wins = stats.wins,
        losses = stats.losses,
        draws = stats.draws,
        win_rate = stats.win_rate(),
        "Match finished"
    );
    Ok(stats)
}
