//! Point attribution for the 3-2-5 variant.
//!
//! When a player fails their target, the points they dropped can be claimed
//! by the other players; whatever is unclaimed counts as self-made. This is
//! pure credit bookkeeping: totals are always derived from the raw round
//! scores, never from attribution.
//!
//! Entry lifecycle: created with defaults when a round is recorded,
//! replaced wholesale when a distribution is saved, and reset to the
//! self-credit default when the underlying score flips back non-negative.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap, Round};
use crate::error::GameError;

/// Credit amounts per player, keyed by roster position.
pub type CreditMap = FxHashMap<PlayerId, u64>;

/// Credit record for one (round, player) cell.
///
/// Invariants:
/// - non-failed: `credit` is exactly `{player: target}`.
/// - failed: the values of `credit` sum to `target`, with the player's own
///   entry being the self-made remainder (present only when positive).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionEntry {
    /// Magnitude the player aimed for; the absolute round score.
    pub target: u64,
    /// Whether the round score was negative when this entry was recorded.
    pub failed: bool,
    /// Who gets credit for the target's points.
    pub credit: CreditMap,
}

impl AttributionEntry {
    /// Default entry for a made target: the player keeps full credit.
    #[must_use]
    pub fn self_made(player: PlayerId, score: i64) -> Self {
        debug_assert!(score >= 0, "self-made entries are for non-negative scores");
        let target = score.unsigned_abs();
        let mut credit = CreditMap::default();
        credit.insert(player, target);
        Self { target, failed: false, credit }
    }

    /// Entry for a failed target with the distribution still uncollected.
    #[must_use]
    pub fn awaiting(target: u64) -> Self {
        Self { target, failed: true, credit: CreditMap::default() }
    }

    /// Sum of all credited amounts.
    #[must_use]
    pub fn credited_total(&self) -> u64 {
        self.credit.values().sum()
    }

    /// Amount credited to one player (zero if absent).
    #[must_use]
    pub fn credit_for(&self, player: PlayerId) -> u64 {
        self.credit.get(&player).copied().unwrap_or(0)
    }
}

/// A request for the boundary to collect a failed player's distribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionRequest {
    /// Round the failed score belongs to.
    pub round: usize,
    /// The player who failed their target.
    pub player: PlayerId,
    /// Magnitude of the failed target.
    pub target: u64,
    /// Players who may claim a share of the points.
    pub eligible_others: Vec<PlayerId>,
}

/// Per-round, per-player attribution records for a 3-2-5 game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionTracker {
    player_count: usize,
    rounds: Vec<PlayerMap<AttributionEntry>>,
}

impl AttributionTracker {
    /// Create an empty tracker for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        Self {
            player_count,
            rounds: Vec::new(),
        }
    }

    /// Record default attribution for a newly appended round.
    ///
    /// Made targets get self-credit; failed targets get an awaiting entry
    /// and a `DistributionRequest` for the boundary to act on. Rounds must
    /// be recorded in ledger order.
    pub fn record_round_defaults(
        &mut self,
        round_index: usize,
        round: &Round,
    ) -> Vec<DistributionRequest> {
        assert_eq!(
            round_index,
            self.rounds.len(),
            "Rounds must be recorded in ledger order"
        );
        assert_eq!(
            round.player_count(),
            self.player_count,
            "Round width must match player count"
        );

        let entries = PlayerMap::new(self.player_count, |player| {
            let score = round.score(player);
            if score >= 0 {
                AttributionEntry::self_made(player, score)
            } else {
                AttributionEntry::awaiting(score.unsigned_abs())
            }
        });
        self.rounds.push(entries);

        round
            .iter()
            .filter(|&(_, score)| score < 0)
            .map(|(player, score)| DistributionRequest {
                round: round_index,
                player,
                target: score.unsigned_abs(),
                eligible_others: self.eligible_others(player),
            })
            .collect()
    }

    /// Save a user-declared distribution for a failed target.
    ///
    /// `amounts` maps the *other* players to the points they claim. The
    /// remainder `target - sum(amounts)` is the failed player's self-made
    /// credit, recorded only when positive. The entry is replaced wholesale;
    /// the raw round score is untouched.
    pub fn save_distribution(
        &mut self,
        round: usize,
        player: PlayerId,
        target: u64,
        amounts: &CreditMap,
    ) -> Result<(), GameError> {
        assert!(
            !amounts.contains_key(&player),
            "Distribution amounts are for other players only"
        );

        let others_total: u64 = amounts.values().sum();
        if others_total > target {
            return Err(GameError::OverAllocation { target, allocated: others_total });
        }

        let mut credit: CreditMap = amounts
            .iter()
            .filter(|&(_, &amount)| amount > 0)
            .map(|(&p, &amount)| (p, amount))
            .collect();
        let self_made = target - others_total;
        if self_made > 0 {
            credit.insert(player, self_made);
        }

        self.rounds[round][player] = AttributionEntry { target, failed: true, credit };
        Ok(())
    }

    /// Replace a cell's entry with the awaiting state after its score
    /// flipped negative and the distribution is still uncollected.
    pub fn mark_awaiting(&mut self, round: usize, player: PlayerId, target: u64) {
        self.rounds[round][player] = AttributionEntry::awaiting(target);
    }

    /// Reset a cell to the self-credit default after its score flipped
    /// back non-negative, discarding any saved distribution.
    pub fn revert_to_positive(&mut self, round: usize, player: PlayerId, score: i64) {
        assert!(score >= 0, "revert_to_positive needs the new non-negative score");
        self.rounds[round][player] = AttributionEntry::self_made(player, score);
    }

    /// Get one cell's entry. Panics on out-of-range indices.
    #[must_use]
    pub fn entry(&self, round: usize, player: PlayerId) -> &AttributionEntry {
        &self.rounds[round][player]
    }

    /// Get all entries for one round. Panics on an out-of-range index.
    #[must_use]
    pub fn round_entries(&self, round: usize) -> &PlayerMap<AttributionEntry> {
        &self.rounds[round]
    }

    /// Get the number of recorded rounds.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Drop all recorded attribution.
    pub fn clear(&mut self) {
        self.rounds.clear();
    }

    fn eligible_others(&self, player: PlayerId) -> Vec<PlayerId> {
        PlayerId::all(self.player_count)
            .filter(|&p| p != player)
            .collect()
    }
}
