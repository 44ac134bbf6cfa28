//! AND/OR proof search memoized by zobrist hash.
//!
//! Proof values only make sense relative to the root they were computed
//! for, so the table can only be reached through a [`ProofSession`], and
//! opening a session wipes it. Entries are keyed by hash and node kind: the
//! same position can be asked as an OR node and as an AND node within one
//! session, and the two answers differ.

use rustc_hash::FxHashMap;

use crate::core::{HashedState, WinningStatus};
use crate::play::Strategy;

/// Proved/disproved values keyed by position hash and node kind.
#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    values: FxHashMap<(u64, Goal), bool>,
    hits: u64,
}

impl TranspositionTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored (position, node kind) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lookups answered from the table since the last clear.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    fn lookup(&mut self, hash: u64, goal: Goal) -> Option<bool> {
        let value = self.values.get(&(hash, goal)).copied();
        if value.is_some() {
            self.hits += 1;
        }
        value
    }

    fn store(&mut self, hash: u64, goal: Goal, value: bool) {
        self.values.insert((hash, goal), value);
    }

    fn clear(&mut self) {
        self.values.clear();
        self.hits = 0;
    }
}

/// Which side of the proof a node sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Goal {
    /// Searcher to move: one proved child is enough.
    Any,
    /// Opponent to move: every child must be proved.
    All,
}

impl Goal {
    fn flip(self) -> Self {
        match self {
            Goal::Any => Goal::All,
            Goal::All => Goal::Any,
        }
    }

    fn terminal_value(self, status: WinningStatus) -> Option<bool> {
        match (self, status) {
            (_, WinningStatus::None) => None,
            (Goal::Any, status) => Some(status == WinningStatus::Win),
            (Goal::All, status) => Some(status == WinningStatus::Lose),
        }
    }
}

/// One root decision's worth of memoized proof search.
///
/// The table is cleared when the session opens and is only written while
/// the session is alive.
pub struct ProofSession<'a> {
    table: &'a mut TranspositionTable,
}

impl<'a> ProofSession<'a> {
    fn open(table: &'a mut TranspositionTable) -> Self {
        table.clear();
        Self { table }
    }

    /// Whether the side to move can force a win.
    pub fn or_value<S: HashedState>(&mut self, state: &S) -> bool {
        self.prove(state, Goal::Any)
    }

    /// Whether the side that just moved can force a win.
    pub fn and_value<S: HashedState>(&mut self, state: &S) -> bool {
        self.prove(state, Goal::All)
    }

    /// First action after which the opponent cannot avoid losing.
    pub fn winning_action<S: HashedState>(&mut self, state: &S) -> Option<S::Action> {
        state.search_actions().into_iter().find(|&action| {
            let mut next = state.clone();
            next.step(action);
            self.prove(&next, Goal::All)
        })
    }

    /// The table as filled so far.
    #[must_use]
    pub fn table(&self) -> &TranspositionTable {
        &*self.table
    }

    fn prove<S: HashedState>(&mut self, state: &S, goal: Goal) -> bool {
        let value = match goal.terminal_value(state.winning_status()) {
            Some(value) => value,
            None => {
                let mut children = state.search_actions().into_iter().map(|action| {
                    let mut next = state.clone();
                    next.step(action);
                    match self.table.lookup(next.hash_value(), goal.flip()) {
                        Some(cached) => cached,
                        None => self.prove(&next, goal.flip()),
                    }
                });
                match goal {
                    Goal::Any => children.any(|proved| proved),
                    Goal::All => children.all(|proved| proved),
                }
            }
        };
        self.table.store(state.hash_value(), goal, value);
        value
    }
}

/// AND/OR search that owns a transposition table.
#[derive(Clone, Debug, Default)]
pub struct MemoizedAndOrSearch {
    table: TranspositionTable,
}

impl MemoizedAndOrSearch {
    /// Create a search with an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new root decision, clearing the table.
    pub fn session(&mut self) -> ProofSession<'_> {
        ProofSession::open(&mut self.table)
    }

    /// The table left by the last session.
    #[must_use]
    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }
}

impl<S: HashedState> Strategy<S> for MemoizedAndOrSearch {
    fn choose_action(&mut self, state: &S) -> Option<S::Action> {
        self.session()
            .winning_action(state)
            .or_else(|| state.search_actions().first().copied())
    }

    fn name(&self) -> &str {
        "memoized-and-or"
    }
}
