//! Recoverable game errors.
//!
//! Every variant is non-fatal: the caller corrects its input and retries.
//! `Display` renders the human-readable reason the presentation layer shows
//! to the user. Malformed calls (out-of-range round or player indices,
//! wrong-width score slices) are programmer errors and panic via assertions
//! instead of appearing here.

use crate::core::PlayerId;

/// A rejected game operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// A score slot was left unset when the round was submitted.
    MissingField,
    /// 3-2-5 only: a score outside {+3, +2, +5, -3, -2, -5}.
    InvalidValue(i64),
    /// 3-2-5 only: two players submitted the same numeric score.
    DuplicateValue(i64),
    /// 3-2-5 only: the absolute values were not exactly one each of 2, 3, 5.
    IncompleteDistribution,
    /// Plus Minus only: a non-negative score below the minimum of 2.
    BelowMinimum { player: PlayerId, value: i64 },
    /// Plus Minus only: a score above the maximum of 13.
    AboveMaximum { player: PlayerId, value: i64 },
    /// Plus Minus only: the round's scores summed below 10.
    InsufficientTotal { total: i64 },
    /// A saved distribution credited other players with more than the target.
    OverAllocation { target: u64, allocated: u64 },
    /// Fewer players selected than the variant's minimum.
    InsufficientPlayers { got: usize, min: usize },
    /// More players selected than the variant's maximum.
    TooManyPlayers { got: usize, max: usize },
    /// A toggle or round submission arrived while a distribution was pending.
    EditInProgress,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::MissingField => write!(f, "please fill all score fields"),
            GameError::InvalidValue(value) => {
                write!(f, "only scores 3, 2, 5, -3, -2, -5 are allowed (got {value})")
            }
            GameError::DuplicateValue(value) => {
                write!(f, "duplicate scores not allowed: {value}")
            }
            GameError::IncompleteDistribution => {
                write!(f, "must use exactly one each of 3, 2, and 5 (positive or negative)")
            }
            GameError::BelowMinimum { player, value } => {
                write!(f, "{player}: minimum score is 2, or negative for a failed attempt (got {value})")
            }
            GameError::AboveMaximum { player, value } => {
                write!(f, "{player}: maximum score is 13 (got {value})")
            }
            GameError::InsufficientTotal { total } => {
                write!(f, "total of all scores must be 10 or more (got {total})")
            }
            GameError::OverAllocation { target, allocated } => {
                write!(f, "distributed points exceed the target: {allocated} > {target}")
            }
            GameError::InsufficientPlayers { got, min } => {
                write!(f, "at least {min} players required (got {got})")
            }
            GameError::TooManyPlayers { got, max } => {
                write!(f, "at most {max} players allowed (got {got})")
            }
            GameError::EditInProgress => {
                write!(f, "finish or cancel the pending score edit first")
            }
        }
    }
}

impl std::error::Error for GameError {}
