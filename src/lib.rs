//! # card-tally
//!
//! A round-scoring and point-attribution engine for two card-game variants:
//! 3-2-5 and Plus Minus.
//!
//! ## Design Principles
//!
//! 1. **Boundary-Agnostic**: The engine knows nothing about rendering,
//!    input fields, or modals. It exposes operations and structured
//!    results; a presentation layer of any kind drives it.
//!
//! 2. **Totals Are Always Derived**: Running totals are rebuilt from the
//!    raw round scores after every mutation, never patched with deltas, so
//!    retroactive sign toggles can never make them drift.
//!
//! 3. **Pending Means Data**: The one suspended workflow — collecting a
//!    failed target's point distribution — is explicit state on the
//!    session, not a suspended computation. The engine itself refuses
//!    conflicting operations while it is pending.
//!
//! ## Architecture
//!
//! - **Validation before mutation**: A candidate round is checked fully
//!   before anything is appended; failures never leave partial state.
//!
//! - **Persistent round history**: The ledger stores rounds in an `im`
//!   vector, so a full session snapshot clones in O(1).
//!
//! - **Attribution is metadata**: Who gets credit for a failed player's
//!   points is bookkeeping on the side; it never feeds the totals.
//!
//! ## Modules
//!
//! - `core`: Player identifiers, per-player maps, variants, rounds
//! - `rules`: Per-variant round validation (pure)
//! - `ledger`: Ordered round history and derived totals
//! - `attribution`: Credit tracking for failed 3-2-5 targets
//! - `session`: The game session and retroactive-edit state machine
//! - `error`: Recoverable game errors
//!
//! ## Example
//!
//! ```
//! use card_tally::{GameSession, GameVariant, PlayerId, ToggleOutcome};
//!
//! let mut session = GameSession::new(
//!     GameVariant::ThreeTwoFive,
//!     vec!["Alice".into(), "Bob".into(), "Carol".into()],
//! )?;
//!
//! session.submit_round(&[Some(3), Some(2), Some(5)])?;
//!
//! // Alice's 3 was actually a failure: toggle it and credit Bob 2 of it.
//! let alice = PlayerId::new(0);
//! let outcome = session.toggle_cell(0, alice)?;
//! assert!(matches!(outcome, ToggleOutcome::DistributionNeeded { .. }));
//!
//! let amounts = [(PlayerId::new(1), 2)].into_iter().collect();
//! let totals = session.save_distribution(0, alice, &amounts)?;
//! assert_eq!(totals[alice], -3);
//! # Ok::<(), card_tally::GameError>(())
//! ```

pub mod attribution;
pub mod core;
pub mod error;
pub mod ledger;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameVariant, PlayerId, PlayerMap, Round};

pub use crate::error::GameError;

pub use crate::ledger::Ledger;

pub use crate::attribution::{AttributionEntry, AttributionTracker, CreditMap, DistributionRequest};

pub use crate::session::{EditState, GameSession, RoundOutcome, ToggleOutcome, Winner};
