//! Engine-level error type used across all game operations.
//!
//! This error type is transport- and storage-agnostic. Every kind is
//! recoverable: the engine never aborts, it returns the untouched room plus
//! the error and lets the caller decide how to surface it.

use thiserror::Error;

use crate::domain::cards_types::Card;
use crate::domain::state::{Phase, Seat};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A room/game/player reference does not resolve.
    #[error("not found: {0}")]
    NotFound(String),

    /// Operation attempted by a seat that is not the active one.
    #[error("seat {seat} is not the active player")]
    NotActivePlayer { seat: Seat },

    /// Bid not strictly greater than the standing bid.
    #[error("bid must exceed the standing bid of {current}")]
    InvalidBid { current: u8 },

    /// Dealer attempted to pass with no standing bid.
    #[error("dealer must bid when no bid stands")]
    MustBid,

    /// Trump selection outside the four suits.
    #[error("invalid trump suit index: {0}")]
    InvalidSuit(u8),

    /// The referenced card is not in the player's hand.
    #[error("card not held: {0}")]
    CardNotHeld(Card),

    /// A hand holds more cards than the fixed post-reshape size allows.
    #[error("hand of {len} cards exceeds the limit of {max}")]
    HandOverflow { len: usize, max: usize },

    /// Trump was led and the player still holds effective trump.
    #[error("must follow trump")]
    MustFollowTrump,

    /// Operation invoked outside the phase it belongs to.
    #[error("operation requires {expected:?} phase, room is in {actual:?}")]
    PhaseMismatch { expected: Phase, actual: Phase },

    /// Remaining input/invariant violations.
    #[error("validation error: {0}")]
    Validation(String),
}

impl GameError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }
}
