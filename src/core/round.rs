//! A single submitted round: one signed score per player.
//!
//! Rounds are created by a successful validation and mutated only by the
//! retroactive sign toggle. SmallVec keeps the 3-4 scores inline without a
//! heap allocation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// One round's scores, indexed by player position.
///
/// Invariant: length equals the session's player count.
///
/// ```
/// use card_tally::core::{PlayerId, Round};
///
/// let mut round = Round::new(&[3, -2, 5]);
/// assert_eq!(round.score(PlayerId::new(1)), -2);
///
/// round.toggle(PlayerId::new(1));
/// assert_eq!(round.score(PlayerId::new(1)), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    scores: SmallVec<[i64; 4]>,
}

impl Round {
    /// Create a round from per-player scores.
    #[must_use]
    pub fn new(scores: &[i64]) -> Self {
        assert!(!scores.is_empty(), "A round must have at least one score");
        Self {
            scores: SmallVec::from_slice(scores),
        }
    }

    /// Number of players this round covers.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.scores.len()
    }

    /// Get one player's score. Panics on an out-of-range player.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i64 {
        self.scores[player.index()]
    }

    /// Replace one player's score. Panics on an out-of-range player.
    pub fn set_score(&mut self, player: PlayerId, value: i64) {
        self.scores[player.index()] = value;
    }

    /// Flip the sign of one player's score, returning the new value.
    pub fn toggle(&mut self, player: PlayerId) -> i64 {
        let flipped = -self.scores[player.index()];
        self.scores[player.index()] = flipped;
        flipped
    }

    /// All scores in player order.
    #[must_use]
    pub fn scores(&self) -> &[i64] {
        &self.scores
    }

    /// Iterate over (PlayerId, score) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, i64)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (PlayerId::new(i as u8), s))
    }
}
