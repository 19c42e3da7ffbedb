//! Trick play: per-card legality, trick completion, turn advancement.

use tracing::{debug, info};

use crate::domain::cards_logic::{effective_suit, hand_has_trump};
use crate::domain::cards_types::Card;
use crate::domain::rules::HAND_SIZE;
use crate::domain::scoring::settle_trick;
use crate::domain::state::{
    advance_to_next_with_cards, require_active, require_phase, require_seat, require_trump, Phase,
    Room, Seat, TablePlay,
};
use crate::errors::GameError;

/// Cards the seat may legally play right now, independent of turn order.
///
/// When trump was led and the hand still holds effective trump, only the
/// trump cards are legal; a hand void in trump may play anything.
pub fn legal_moves(room: &Room, seat: Seat) -> Vec<Card> {
    if room.game.phase != Phase::Trick {
        return Vec::new();
    }
    let Some(trump) = room.game.trump else {
        return Vec::new();
    };
    let Ok(idx) = require_seat(seat) else {
        return Vec::new();
    };

    let hand = &room.players[idx].hand;
    if let Some(led) = room.game.led {
        if led == trump && hand_has_trump(hand, trump) {
            return hand
                .iter()
                .copied()
                .filter(|&c| effective_suit(c, trump) == trump)
                .collect();
        }
    }
    hand.clone()
}

/// Play a card into the current trick, enforcing turn, ownership, and the
/// follow-trump rule. Completing the trick settles it immediately.
pub fn play_card(room: &mut Room, seat: Seat, card: Card) -> Result<(), GameError> {
    require_phase(&room.game, Phase::Trick)?;
    require_active(&room.game, seat)?;
    let idx = require_seat(seat)?;
    let trump = require_trump(&room.game)?;

    let hand_len = room.players[idx].hand.len();
    if hand_len > HAND_SIZE {
        return Err(GameError::HandOverflow {
            len: hand_len,
            max: HAND_SIZE,
        });
    }
    if !room.players[idx].holds(card) {
        return Err(GameError::CardNotHeld(card));
    }
    if !legal_moves(room, seat).contains(&card) {
        return Err(GameError::MustFollowTrump);
    }

    let eff = effective_suit(card, trump);
    if room.game.led.is_none() {
        room.game.led = Some(eff);
        room.game.leader = Some(seat);
        debug!(room_id = room.id, seat, led = eff.name(), "trick led");
    }

    let hand = &mut room.players[idx].hand;
    if let Some(pos) = hand.iter().position(|&c| c == card) {
        hand.remove(pos);
    }
    room.players[idx].played = Some(TablePlay::Card(card));
    room.status = format!("{} played the {}", room.player(seat).display_name, card);

    info!(room_id = room.id, seat, card = card.value(), "card played");
    finish_action(room, seat);
    Ok(())
}

/// A hand-empty seat forgoing play for the trick. Participates in the
/// completion check and turn advancement exactly like a played card, but
/// never scores.
pub fn go_out(room: &mut Room, seat: Seat) -> Result<(), GameError> {
    require_phase(&room.game, Phase::Trick)?;
    require_active(&room.game, seat)?;
    let idx = require_seat(seat)?;

    if !room.players[idx].hand.is_empty() {
        return Err(GameError::validation("cannot go out while holding cards"));
    }

    room.players[idx].played = Some(TablePlay::Out);
    room.status = format!("{} is out", room.player(seat).display_name);

    info!(room_id = room.id, seat, "player went out");
    finish_action(room, seat);
    Ok(())
}

/// Shared tail of `play_card` and `go_out`: settle the trick if every seat
/// has acted (or is empty-handed), otherwise pass the turn along.
fn finish_action(room: &mut Room, seat: Seat) {
    if trick_complete(room) {
        settle_trick(room);
    } else {
        room.game.turn = advance_to_next_with_cards(room, seat);
    }
}

fn trick_complete(room: &Room) -> bool {
    room.players
        .iter()
        .all(|p| p.played.is_some() || p.hand.is_empty())
}
