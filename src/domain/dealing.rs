//! Shuffling and dealing.
//!
//! The shuffle is a textbook uniform Fisher-Yates via `rand`; the original
//! swap-with-any-index variant was biased and is deliberately not kept.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::domain::cards_types::Card;
use crate::domain::rules::{DEAL_SIZE, DECK_SIZE, PLAYERS};
use crate::domain::state::{next_seat, GameState, Phase, Room, Seat};
use crate::errors::GameError;

/// The full 54-card domain in value order.
pub fn full_deck() -> Vec<Card> {
    (1..=DECK_SIZE as u8).map(Card).collect()
}

/// Deal a fresh round into the room: rotate (or pick) the dealer, shuffle,
/// give nine cards to each seat, and open bidding left of the dealer.
///
/// Legal from `Init` (first round, dealer drawn at random) and `RoundOver`
/// (dealer advances one seat). Cumulative scores carry over; everything
/// else in the game state resets.
pub fn deal_new_round<R: Rng + ?Sized>(room: &mut Room, rng: &mut R) -> Result<(), GameError> {
    match room.game.phase {
        Phase::Init | Phase::RoundOver => {}
        actual => {
            return Err(GameError::PhaseMismatch {
                expected: Phase::RoundOver,
                actual,
            })
        }
    }

    let dealer = match room.dealer {
        None => rng.random_range(0..PLAYERS as Seat),
        Some(d) => next_seat(d),
    };
    room.dealer = Some(dealer);

    let mut deck = full_deck();
    deck.shuffle(rng);

    for seat in 0..PLAYERS {
        let start = seat * DEAL_SIZE;
        let mut hand = deck[start..start + DEAL_SIZE].to_vec();
        hand.sort();
        room.players[seat].hand = hand;
        room.players[seat].played = None;
    }

    let first_bidder = next_seat(dealer);
    room.game = GameState {
        phase: Phase::Bidding,
        stock: deck[PLAYERS * DEAL_SIZE..].to_vec(),
        bid: None,
        trump: None,
        led: None,
        leader: None,
        turn: Some(first_bidder),
        points_round: [0, 0],
        scores: room.game.scores,
        hands_set: false,
    };
    room.status = format!(
        "{} deals; {} opens the bidding",
        room.player(dealer).display_name,
        room.player(first_bidder).display_name
    );

    info!(room_id = room.id, dealer, first_bidder, "round dealt");
    Ok(())
}

/// Lifecycle driver invoked by the caller between tricks and rounds.
///
/// After a settled round it rotates the dealer and redeals; mid-trick it
/// re-normalizes the active seat past empty hands; on a finished game it is
/// a no-op.
pub fn advance_after_trick<R: Rng + ?Sized>(room: &mut Room, rng: &mut R) -> Result<(), GameError> {
    match room.game.phase {
        Phase::RoundOver => deal_new_round(room, rng),
        Phase::GameOver => Ok(()),
        Phase::Trick => {
            if let Some(turn) = room.game.turn {
                if room.player(turn).hand.is_empty() {
                    let next = crate::domain::state::advance_to_next_with_cards(room, turn);
                    room.game.turn = next;
                    room.game.leader = next;
                }
            }
            Ok(())
        }
        actual => Err(GameError::PhaseMismatch {
            expected: Phase::RoundOver,
            actual,
        }),
    }
}
