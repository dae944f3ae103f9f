//! The round ledger: ordered round history plus derived totals.
//!
//! The ledger is append-only except for in-place sign edits. Totals are
//! never kept incrementally: after any mutation the caller rebuilds them
//! with `recompute_totals`, so `total[p] == sum of p's column` holds no
//! matter how the rounds were edited. The history is an `im::Vector`, so
//! cloning a session is O(1).
//!
//! The ledger trusts its callers: rounds arrive already validated, and
//! out-of-range indices are programmer errors that panic.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap, Round};

/// Ordered sequence of rounds for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    player_count: usize,
    rounds: Vector<Round>,
}

impl Ledger {
    /// Create an empty ledger for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self {
            player_count,
            rounds: Vector::new(),
        }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Get the number of recorded rounds.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Append an already-validated round, returning its index.
    pub fn append_round(&mut self, round: Round) -> usize {
        assert_eq!(
            round.player_count(),
            self.player_count,
            "Round width must match player count"
        );
        self.rounds.push_back(round);
        self.rounds.len() - 1
    }

    /// Get one recorded round. Panics on an out-of-range index.
    #[must_use]
    pub fn round(&self, index: usize) -> &Round {
        &self.rounds[index]
    }

    /// Iterate over recorded rounds in order.
    pub fn rounds(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter()
    }

    /// Get one cell's score. Panics on out-of-range indices.
    #[must_use]
    pub fn score(&self, round: usize, player: PlayerId) -> i64 {
        self.rounds[round].score(player)
    }

    /// Replace one cell's score.
    ///
    /// Does not recompute totals; the caller batches the rebuild with any
    /// attribution updates. Panics on out-of-range indices.
    pub fn set_score(&mut self, round: usize, player: PlayerId, value: i64) {
        self.rounds[round].set_score(player, value);
    }

    /// Rebuild per-player totals from the full round history.
    ///
    /// O(rounds × players), and deliberately so: a full rebuild cannot
    /// drift from the raw scores the way applied deltas could.
    #[must_use]
    pub fn recompute_totals(&self) -> PlayerMap<i64> {
        let mut totals = PlayerMap::with_value(self.player_count, 0i64);
        for round in &self.rounds {
            for (player, score) in round.iter() {
                totals[player] += score;
            }
        }
        totals
    }

    /// Drop all recorded rounds.
    pub fn clear(&mut self) {
        self.rounds.clear();
    }
}
