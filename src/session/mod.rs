//! The game session: the engine's surface toward the presentation layer.
//!
//! A `GameSession` owns everything one game needs — the roster, the round
//! ledger, attribution records and the edit state machine — and exposes
//! the operations the boundary drives: submit a round, toggle a recorded
//! cell, save or cancel a distribution, compute the winner. State is
//! process-local and lives for the session only; starting a new game
//! builds a fresh session.
//!
//! Every operation runs to completion synchronously. While a distribution
//! is awaited, conflicting operations fail with `EditInProgress` — the
//! core enforces this itself rather than trusting the boundary's disabled
//! buttons.

pub mod edit;

pub use edit::{EditState, ToggleOutcome};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::attribution::{AttributionEntry, AttributionTracker, CreditMap, DistributionRequest};
use crate::core::{GameVariant, PlayerId, PlayerMap, Round};
use crate::error::GameError;
use crate::ledger::Ledger;
use crate::rules;

/// Outcome of a successfully submitted round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Index of the newly recorded round.
    pub round: usize,
    /// Totals rebuilt after the append.
    pub totals: PlayerMap<i64>,
    /// Distribution capture the boundary should run for each failed
    /// target in the new round (3-2-5 only; empty for Plus Minus).
    pub distribution_requests: Vec<DistributionRequest>,
}

/// The declared winner(s) of a game: highest total, ties included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    /// Roster positions of everyone sharing the top total.
    pub players: Vec<PlayerId>,
    /// Display names matching `players`.
    pub names: Vec<String>,
    /// The winning total.
    pub score: i64,
}

/// One interactive scoring session.
///
/// ```
/// use card_tally::core::{GameVariant, PlayerId};
/// use card_tally::session::GameSession;
///
/// let mut session = GameSession::new(
///     GameVariant::ThreeTwoFive,
///     vec!["Alice".into(), "Bob".into(), "Carol".into()],
/// ).unwrap();
///
/// let outcome = session.submit_round(&[Some(3), Some(-2), Some(-5)]).unwrap();
/// assert_eq!(outcome.totals[PlayerId::new(0)], 3);
/// assert_eq!(outcome.distribution_requests.len(), 2);
///
/// let winner = session.compute_winner();
/// assert_eq!(winner.names, ["Alice"]);
/// assert_eq!(winner.score, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    variant: GameVariant,
    players: Vec<String>,
    ledger: Ledger,
    attribution: AttributionTracker,
    edit: EditState,
}

impl GameSession {
    /// Start a game of `variant` with the selected players, in seating
    /// order. Fails if the roster size is outside the variant's bounds.
    pub fn new(variant: GameVariant, players: Vec<String>) -> Result<Self, GameError> {
        let got = players.len();
        if got < variant.min_players() {
            return Err(GameError::InsufficientPlayers { got, min: variant.min_players() });
        }
        if got > variant.max_players() {
            return Err(GameError::TooManyPlayers { got, max: variant.max_players() });
        }

        Ok(Self {
            variant,
            ledger: Ledger::new(got),
            attribution: AttributionTracker::new(got),
            edit: EditState::Stable,
            players,
        })
    }

    /// Wipe all recorded state, keeping the variant and roster.
    ///
    /// Equivalent to returning home and starting the same game again.
    pub fn reset(&mut self) {
        self.ledger.clear();
        self.attribution.clear();
        self.edit = EditState::Stable;
    }

    // === Accessors for the boundary ===

    /// The session's variant.
    #[must_use]
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    /// Player display names in seating order.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// One player's display name.
    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.players[player.index()]
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get the number of recorded rounds.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.ledger.round_count()
    }

    /// One recorded round's scores.
    #[must_use]
    pub fn round(&self, index: usize) -> &Round {
        self.ledger.round(index)
    }

    /// Current running totals, rebuilt from the ledger.
    #[must_use]
    pub fn totals(&self) -> PlayerMap<i64> {
        self.ledger.recompute_totals()
    }

    /// The structured credit record for one cell (3-2-5 sessions only;
    /// rendering names and amounts is the boundary's job).
    #[must_use]
    pub fn attribution_entry(&self, round: usize, player: PlayerId) -> &AttributionEntry {
        assert!(
            self.variant.tracks_attribution(),
            "Attribution exists only in 3-2-5 games"
        );
        self.attribution.entry(round, player)
    }

    /// Current edit state.
    #[must_use]
    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    // === Operations ===

    /// Validate and record a candidate round.
    ///
    /// On success the round is appended, default attribution is recorded
    /// (3-2-5), and the outcome carries the rebuilt totals plus any
    /// distribution captures the boundary should run. On failure nothing
    /// is mutated. The slice must have one slot per player.
    pub fn submit_round(&mut self, scores: &[Option<i64>]) -> Result<RoundOutcome, GameError> {
        if self.edit.is_pending() {
            return Err(GameError::EditInProgress);
        }
        assert_eq!(
            scores.len(),
            self.players.len(),
            "One score slot per player"
        );

        rules::validate(self.variant, scores)?;

        let filled: SmallVec<[i64; 4]> = scores.iter().copied().flatten().collect();
        let round = Round::new(&filled);
        let index = self.ledger.append_round(round.clone());

        let distribution_requests = if self.variant.tracks_attribution() {
            self.attribution.record_round_defaults(index, &round)
        } else {
            Vec::new()
        };

        Ok(RoundOutcome {
            round: index,
            totals: self.ledger.recompute_totals(),
            distribution_requests,
        })
    }

    /// Flip the sign of a recorded cell.
    ///
    /// Totals always reflect the flipped raw value immediately. In a 3-2-5
    /// game a flip to negative suspends in `AwaitingDistribution` until the
    /// boundary saves a distribution or cancels; while suspended the cell's
    /// attribution reads as an uncollected failure. Any other flip completes
    /// directly (resetting the cell's attribution to self-credit in 3-2-5).
    /// Fails with `EditInProgress` while another edit is pending. Indices
    /// out of range panic.
    pub fn toggle_cell(
        &mut self,
        round: usize,
        player: PlayerId,
    ) -> Result<ToggleOutcome, GameError> {
        if self.edit.is_pending() {
            return Err(GameError::EditInProgress);
        }

        let flipped = -self.ledger.score(round, player);
        self.ledger.set_score(round, player, flipped);
        let totals = self.ledger.recompute_totals();

        if self.variant.tracks_attribution() && flipped < 0 {
            let target = flipped.unsigned_abs();
            self.attribution.mark_awaiting(round, player, target);
            self.edit = EditState::AwaitingDistribution { round, player, target };
            return Ok(ToggleOutcome::DistributionNeeded {
                request: DistributionRequest {
                    round,
                    player,
                    target,
                    eligible_others: self.eligible_others(player),
                },
                totals,
            });
        }

        if self.variant.tracks_attribution() {
            self.attribution.revert_to_positive(round, player, flipped);
        }
        Ok(ToggleOutcome::Completed { totals })
    }

    /// Save a user-declared distribution for a failed target.
    ///
    /// Legal either for the cell currently awaiting distribution (which
    /// returns the session to `Stable`) or, with no edit pending, for any
    /// recorded failed score (re-declaring a submitted round's credit).
    /// `OverAllocation` leaves all state as it was, including a pending
    /// edit. Calling against the wrong cell, a non-failed cell, or in a
    /// Plus Minus game is a programmer error.
    pub fn save_distribution(
        &mut self,
        round: usize,
        player: PlayerId,
        amounts: &CreditMap,
    ) -> Result<PlayerMap<i64>, GameError> {
        assert!(
            self.variant.tracks_attribution(),
            "Attribution exists only in 3-2-5 games"
        );

        match self.edit {
            EditState::AwaitingDistribution { round: r, player: p, target } => {
                assert!(
                    r == round && p == player,
                    "A different cell's distribution is pending"
                );
                self.attribution.save_distribution(round, player, target, amounts)?;
                self.edit = EditState::Stable;
            }
            EditState::Stable => {
                let entry = self.attribution.entry(round, player);
                assert!(entry.failed, "No failed score at this cell to distribute");
                let target = entry.target;
                self.attribution.save_distribution(round, player, target, amounts)?;
            }
        }

        Ok(self.ledger.recompute_totals())
    }

    /// Abandon the pending edit: the cell's sign flips back and the
    /// distribution request is discarded, leaving attribution exactly as
    /// it was before the toggle. Calling without a pending edit, or for
    /// the wrong cell, is a programmer error.
    pub fn cancel_edit(&mut self, round: usize, player: PlayerId) -> PlayerMap<i64> {
        match self.edit {
            EditState::AwaitingDistribution { round: r, player: p, .. } => {
                assert!(
                    r == round && p == player,
                    "A different cell's distribution is pending"
                );
            }
            EditState::Stable => panic!("No edit pending to cancel"),
        }

        let value = self.ledger.score(round, player);
        debug_assert!(value < 0, "Pending edits always hold a negative score");
        let restored = -value;
        self.ledger.set_score(round, player, restored);
        // Only 3-2-5 toggles suspend, so the tracker always has this cell.
        // A positive score's entry is always the self-credit default, so
        // this reconstructs exactly what the toggle overwrote.
        self.attribution.revert_to_positive(round, player, restored);
        self.edit = EditState::Stable;

        self.ledger.recompute_totals()
    }

    /// Declare the winner(s): every player sharing the highest total.
    ///
    /// An empty ledger reports all players tied at zero.
    #[must_use]
    pub fn compute_winner(&self) -> Winner {
        let totals = self.ledger.recompute_totals();
        let best = totals.iter().map(|(_, &t)| t).max().unwrap_or(0);

        let players: Vec<PlayerId> = totals
            .iter()
            .filter(|&(_, &t)| t == best)
            .map(|(p, _)| p)
            .collect();
        let names = players
            .iter()
            .map(|&p| self.players[p.index()].clone())
            .collect();

        Winner { players, names, score: best }
    }

    fn eligible_others(&self, player: PlayerId) -> Vec<PlayerId> {
        PlayerId::all(self.players.len())
            .filter(|&p| p != player)
            .collect()
    }
}
