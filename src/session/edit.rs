//! The retroactive-edit state machine.
//!
//! A toggle that turns a 3-2-5 score negative cannot complete until the
//! user declares who gets credit for the dropped points. That wait is
//! modeled as explicit data on the session, never as suspended execution,
//! and at most one edit can be pending at a time.

use serde::{Deserialize, Serialize};

use crate::attribution::DistributionRequest;
use crate::core::{PlayerId, PlayerMap};

/// Where the session stands with respect to retroactive edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditState {
    /// No edit pending; all operations are available.
    Stable,
    /// A toggle made this cell negative and its distribution is still
    /// uncollected. Only `save_distribution` or `cancel_edit` for this
    /// exact cell may run next.
    AwaitingDistribution {
        /// Round of the toggled cell.
        round: usize,
        /// Player of the toggled cell.
        player: PlayerId,
        /// Magnitude of the now-failed target.
        target: u64,
    },
}

impl EditState {
    /// Whether an edit is awaiting distribution input.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, EditState::AwaitingDistribution { .. })
    }
}

/// Result of a completed or suspended toggle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleOutcome {
    /// The toggle finished; totals already reflect the flipped score.
    Completed {
        /// Totals rebuilt after the flip.
        totals: PlayerMap<i64>,
    },
    /// The flipped score went negative in a 3-2-5 game: the boundary must
    /// collect a distribution (or cancel). Totals already reflect the raw
    /// flipped value; only attribution metadata is pending.
    DistributionNeeded {
        /// What the boundary needs to collect.
        request: DistributionRequest,
        /// Provisional totals with the flipped score applied.
        totals: PlayerMap<i64>,
    },
}

impl ToggleOutcome {
    /// Totals snapshot carried by either outcome.
    #[must_use]
    pub fn totals(&self) -> &PlayerMap<i64> {
        match self {
            ToggleOutcome::Completed { totals }
            | ToggleOutcome::DistributionNeeded { totals, .. } => totals,
        }
    }
}
