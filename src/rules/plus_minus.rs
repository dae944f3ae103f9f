//! Plus Minus validation: open bids with floor, cap, and a round-total bar.
//!
//! Unlike 3-2-5 there is no closed menu of magnitudes: any score of 2 or
//! more is a made bid, and any negative score of any magnitude is a failed
//! attempt. Per-score checks run in slot order before the aggregate total
//! check, so the first offending score names the violation.

use crate::core::PlayerId;
use crate::error::GameError;

/// Smallest legal made score.
pub const MIN_SCORE: i64 = 2;

/// Largest legal score.
pub const MAX_SCORE: i64 = 13;

/// Smallest legal sum of a round's scores.
pub const MIN_ROUND_TOTAL: i64 = 10;

/// Check a filled Plus Minus round. First failing check wins.
pub(crate) fn validate(scores: &[i64]) -> Result<(), GameError> {
    for (i, &value) in scores.iter().enumerate() {
        let player = PlayerId::new(i as u8);
        if value >= 0 && value < MIN_SCORE {
            return Err(GameError::BelowMinimum { player, value });
        }
        if value > MAX_SCORE {
            return Err(GameError::AboveMaximum { player, value });
        }
    }

    let total: i64 = scores.iter().sum();
    if total < MIN_ROUND_TOTAL {
        return Err(GameError::InsufficientTotal { total });
    }

    Ok(())
}
