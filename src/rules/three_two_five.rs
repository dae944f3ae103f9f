//! 3-2-5 validation: a closed score menu, no repeats, full distribution.
//!
//! Each round hands out the targets 3, 2 and 5, one per player. A made
//! target scores its value, a failed one its negative, so a legal round is
//! any signing of a permutation of {3, 2, 5} with no numeric value repeated.

use smallvec::SmallVec;

use crate::error::GameError;

/// The only scores a 3-2-5 round may contain.
pub const VALID_SCORES: [i64; 6] = [3, 2, 5, -3, -2, -5];

/// Target magnitudes, ascending. Every round distributes exactly these.
pub const TARGETS: [i64; 3] = [2, 3, 5];

/// Check a filled 3-2-5 round. First failing check wins.
pub(crate) fn validate(scores: &[i64]) -> Result<(), GameError> {
    for &score in scores {
        if !VALID_SCORES.contains(&score) {
            return Err(GameError::InvalidValue(score));
        }
    }

    // First value that reappears names the duplicate.
    for (i, &score) in scores.iter().enumerate() {
        if scores[..i].contains(&score) {
            return Err(GameError::DuplicateValue(score));
        }
    }

    let mut magnitudes: SmallVec<[i64; 4]> = scores.iter().map(|s| s.abs()).collect();
    magnitudes.sort_unstable();
    if magnitudes.as_slice() != TARGETS {
        return Err(GameError::IncompleteDistribution);
    }

    Ok(())
}

/// The unique score that completes a partially entered 3-2-5 round, if any.
///
/// Used by input boundaries to auto-fill the last field: once two scores of
/// the same sign are entered, the third is forced. Mixed signs, repeats, or
/// fewer than two entries leave the completion undetermined.
///
/// ```
/// use card_tally::rules::three_two_five::completion;
///
/// assert_eq!(completion(&[3, 2]), Some(5));
/// assert_eq!(completion(&[-5, -2]), Some(-3));
/// assert_eq!(completion(&[3, -2]), None);
/// assert_eq!(completion(&[3]), None);
/// ```
#[must_use]
pub fn completion(used: &[i64]) -> Option<i64> {
    let has_positive = used.iter().any(|&s| s > 0);
    let has_negative = used.iter().any(|&s| s < 0);
    if has_positive && has_negative {
        return None;
    }

    let magnitudes: SmallVec<[i64; 4]> = used.iter().map(|s| s.abs()).collect();
    let mut missing = TARGETS.iter().copied().filter(|t| !magnitudes.contains(t));
    let remaining = missing.next()?;
    if missing.next().is_some() {
        return None;
    }

    Some(if has_negative { -remaining } else { remaining })
}
