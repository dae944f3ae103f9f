//! Core engine types: players, variants, rounds.
//!
//! These are the building blocks every other module works in terms of.
//! They carry no game rules themselves; rules live in `rules`, state in
//! `ledger`, `attribution` and `session`.

pub mod player;
pub mod round;
pub mod variant;

pub use player::{PlayerId, PlayerMap};
pub use round::Round;
pub use variant::GameVariant;
