//! Domain layer: pure game logic types and operations.

pub mod bidding;
pub mod cards_logic;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tricks;
pub mod trump;

#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_trump;

// Re-exports for ergonomics
pub use bidding::{pass_bid, submit_bid};
pub use cards_logic::{card_points, effective_suit, hand_has_trump, trump_rank, PointAward};
pub use cards_types::{Card, Suit};
pub use dealing::{advance_after_trick, deal_new_round};
pub use scoring::winning_team;
pub use state::{team_of, Phase, Player, Room, Seat, Team};
pub use tricks::{go_out, legal_moves, play_card};
pub use trump::{declare_trump, set_discarded_hand};
