#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for a four-player partnership Pitch variant played with a
//! 54-card deck (both jokers) and an off-suit trump jack.
//!
//! The engine is transport- and storage-agnostic: a caller loads a fully
//! populated [`domain::Room`] aggregate, invokes one operation against it
//! (bid, trump declaration, card play, ...), then persists and broadcasts the
//! mutated aggregate. Every operation validates completely before mutating,
//! so an `Err` always leaves the room unchanged.

pub mod domain;
pub mod errors;
pub mod registry;

// Re-exports for public API
pub use domain::cards_types::{Card, Suit};
pub use domain::snapshot::{player_view, room_snapshot, RoomSnapshot};
pub use domain::state::{team_of, Phase, Player, Room, Seat, Team};
pub use errors::GameError;
pub use registry::{RoomId, RoomRegistry};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
