//! Game variants and their fixed parameters.
//!
//! The variant is chosen once per session and determines which validation
//! and attribution rules apply. The engine never branches on anything else.

use serde::{Deserialize, Serialize};

/// The two supported card-game variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    /// Fixed-contract game: each round distributes targets 3, 2 and 5
    /// among exactly three players, with failed targets scored negative.
    ThreeTwoFive,
    /// Open-bid game for three or four players: any score of 2 or more,
    /// capped at 13, negatives for failed attempts, round total of 10+.
    PlusMinus,
}

impl GameVariant {
    /// Minimum players a game of this variant needs.
    #[must_use]
    pub const fn min_players(self) -> usize {
        3
    }

    /// Maximum players a game of this variant allows.
    #[must_use]
    pub const fn max_players(self) -> usize {
        match self {
            GameVariant::ThreeTwoFive => 3,
            GameVariant::PlusMinus => 4,
        }
    }

    /// Whether this variant tracks point attribution for failed targets.
    ///
    /// Plus Minus has no attribution concept: a toggle is always a plain
    /// sign flip with a totals recomputation.
    #[must_use]
    pub const fn tracks_attribution(self) -> bool {
        matches!(self, GameVariant::ThreeTwoFive)
    }

    /// Rules blurb for the boundary's rules panel.
    ///
    /// The engine owns the text so every front end shows the same rules;
    /// presentation is the boundary's job.
    #[must_use]
    pub const fn rules_text(self) -> &'static str {
        match self {
            GameVariant::ThreeTwoFive => {
                "Only scores allowed: 3, 2, 5, -3, -2, -5. \
                 If you fail to make your target, you get negative of that target. \
                 All three scores (3, 2, 5) must be distributed each round."
            }
            GameVariant::PlusMinus => {
                "Minimum individual score: 2 (or negative for failed attempts). \
                 Maximum individual score: 13. \
                 Total of all scores must be 10 or more."
            }
        }
    }
}

impl std::fmt::Display for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameVariant::ThreeTwoFive => write!(f, "3 2 5"),
            GameVariant::PlusMinus => write!(f, "Plus Minus"),
        }
    }
}
