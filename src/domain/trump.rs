//! Trump declaration and the hand reshape that follows it.
//!
//! Once the winning bidder names a suit, every other hand is filtered to
//! its effective-trump cards and topped back up to six from the stock; the
//! bidder takes the entire remaining stock and must discard down to six.

use tracing::info;

use crate::domain::cards_logic::effective_suit;
use crate::domain::cards_types::{Card, Suit};
use crate::domain::rules::{HAND_SIZE, PLAYERS};
use crate::domain::state::{
    require_bid, require_phase, require_seat, Phase, Room, Seat,
};
use crate::errors::GameError;

/// Name the trump suit. Legal only for the seat holding the bid; the index
/// must be one of the four suits (0..=3) or the call fails `InvalidSuit`.
pub fn declare_trump(room: &mut Room, seat: Seat, suit_index: u8) -> Result<(), GameError> {
    require_phase(&room.game, Phase::TrumpSelect)?;
    let bid = require_bid(&room.game)?;
    if bid.seat != seat {
        return Err(GameError::NotActivePlayer { seat });
    }
    let trump = Suit::try_from(suit_index)?;

    let players = &mut room.players;
    let game = &mut room.game;
    game.trump = Some(trump);

    for s in 0..PLAYERS {
        if s as Seat == bid.seat {
            continue;
        }
        let hand = &mut players[s].hand;
        hand.retain(|&c| effective_suit(c, trump) == trump);
        while hand.len() < HAND_SIZE && !game.stock.is_empty() {
            hand.push(game.stock.remove(0));
        }
        hand.sort();
    }

    // Kitty pickup: the bidder absorbs whatever the top-ups left behind.
    let bidder = &mut players[bid.seat as usize];
    bidder.hand.append(&mut game.stock);
    bidder.hand.sort();

    game.phase = Phase::Discard;
    game.turn = Some(bid.seat);
    room.status = format!(
        "{} named {} trump; discard down to {}",
        room.player(bid.seat).display_name,
        trump,
        HAND_SIZE
    );

    info!(room_id = room.id, seat, trump = trump.name(), "trump declared");
    Ok(())
}

/// Replace a player's inflated hand with a chosen six-card subset of it.
/// Once every seat holds exactly six cards the reshape is final: hands are
/// locked and the bidder leads the first trick.
pub fn set_discarded_hand(room: &mut Room, seat: Seat, new_hand: Vec<Card>) -> Result<(), GameError> {
    require_phase(&room.game, Phase::Discard)?;
    let idx = require_seat(seat)?;
    let bid = require_bid(&room.game)?;

    if new_hand.len() > HAND_SIZE {
        return Err(GameError::HandOverflow {
            len: new_hand.len(),
            max: HAND_SIZE,
        });
    }
    if new_hand.len() < HAND_SIZE {
        return Err(GameError::validation(format!(
            "discarded hand must be exactly {HAND_SIZE} cards"
        )));
    }
    let mut deduped = new_hand.clone();
    deduped.sort();
    deduped.dedup();
    if deduped.len() != HAND_SIZE {
        return Err(GameError::validation("discarded hand repeats a card"));
    }
    for &card in &new_hand {
        if !room.players[idx].holds(card) {
            return Err(GameError::CardNotHeld(card));
        }
    }

    room.players[idx].hand = deduped;

    if room.players.iter().all(|p| p.hand.len() == HAND_SIZE) {
        room.game.hands_set = true;
        room.game.phase = Phase::Trick;
        room.game.turn = Some(bid.seat);
        room.game.leader = Some(bid.seat);
        room.game.led = None;
        room.status = format!(
            "Hands are set; {} leads",
            room.player(bid.seat).display_name
        );
    } else {
        room.status = format!("{} kept {} cards", room.player(seat).display_name, HAND_SIZE);
    }

    info!(room_id = room.id, seat, "hand discarded to size");
    Ok(())
}
