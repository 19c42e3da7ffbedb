//! Fixed rules constants for the Pitch variant.

pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 54;
/// Cards in each suit's contiguous value block.
pub const SUIT_SPAN: u8 = 13;
/// Cards dealt to each seat at the start of a round.
pub const DEAL_SIZE: usize = 9;
/// Fixed hand size once trump is declared and discards are in.
pub const HAND_SIZE: usize = 6;
/// Cumulative score at which a partnership wins the game.
pub const TARGET_SCORE: i16 = 31;
/// Total points available in a round if every point card is played.
pub const ROUND_POINTS: i16 = 10;
