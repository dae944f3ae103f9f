//! Round validation rules, specialized per game variant.
//!
//! Validation is a pure function over the proposed scores: nothing is
//! appended to the ledger until the whole round passes. A `None` slot means
//! the corresponding input field was left empty.
//!
//! Check ordering is part of the contract — the first failing check wins:
//! - 3-2-5: value-set check, then duplicate check, then completeness check.
//! - Plus Minus: per-score checks in slot order, then the round-total check.

pub mod plus_minus;
pub mod three_two_five;

use smallvec::SmallVec;

use crate::core::GameVariant;
use crate::error::GameError;

/// Validate a candidate round for the given variant.
///
/// Returns `Ok(())` if the round may be appended to the ledger, or the
/// first rule violation otherwise.
///
/// ```
/// use card_tally::core::GameVariant;
/// use card_tally::rules::validate;
///
/// let round = [Some(3), Some(-2), Some(-5)];
/// assert!(validate(GameVariant::ThreeTwoFive, &round).is_ok());
/// ```
pub fn validate(variant: GameVariant, scores: &[Option<i64>]) -> Result<(), GameError> {
    if scores.iter().any(Option::is_none) {
        return Err(GameError::MissingField);
    }
    let filled: SmallVec<[i64; 4]> = scores.iter().copied().flatten().collect();

    match variant {
        GameVariant::ThreeTwoFive => three_two_five::validate(&filled),
        GameVariant::PlusMinus => plus_minus::validate(&filled),
    }
}
