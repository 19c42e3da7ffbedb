//! Competitive bidding for the right to name trump.
//!
//! Bidding runs clockwise from the seat left of the dealer and always ends
//! on the dealer's action: the dealer either overbids (taking the bid) or
//! passes on a standing bid. A dealer facing no standing bid is forced to
//! bid at least once.

use tracing::info;

use crate::domain::state::{
    advance_to_next_with_cards, require_active, require_dealer, require_phase, team_of, BidRecord,
    Phase, Room, Seat,
};
use crate::errors::GameError;

/// Take the standing bid. Fails with `InvalidBid` unless `amount` strictly
/// exceeds the current bid. The dealer's bid closes the auction.
pub fn submit_bid(room: &mut Room, seat: Seat, amount: u8) -> Result<(), GameError> {
    require_phase(&room.game, Phase::Bidding)?;
    require_active(&room.game, seat)?;
    let dealer = require_dealer(room)?;

    let current = room.game.current_bid();
    if amount <= current {
        return Err(GameError::InvalidBid { current });
    }

    room.game.bid = Some(BidRecord {
        seat,
        team: team_of(seat),
        amount,
    });

    if seat == dealer {
        close_auction(room, seat, amount);
    } else {
        room.game.turn = advance_to_next_with_cards(room, seat);
        room.status = format!("{} bid {}", room.player(seat).display_name, amount);
    }

    info!(room_id = room.id, seat, amount, "bid submitted");
    Ok(())
}

/// Decline to bid. The dealer may only pass on a standing bid; passing with
/// no bid on the table fails with `MustBid`.
pub fn pass_bid(room: &mut Room, seat: Seat) -> Result<(), GameError> {
    require_phase(&room.game, Phase::Bidding)?;
    require_active(&room.game, seat)?;
    let dealer = require_dealer(room)?;

    if seat == dealer {
        let Some(bid) = room.game.bid else {
            return Err(GameError::MustBid);
        };
        close_auction(room, bid.seat, bid.amount);
    } else {
        room.game.turn = advance_to_next_with_cards(room, seat);
        room.status = format!("{} passed", room.player(seat).display_name);
    }

    info!(room_id = room.id, seat, "pass");
    Ok(())
}

fn close_auction(room: &mut Room, bidder: Seat, amount: u8) {
    room.game.phase = Phase::TrumpSelect;
    room.game.turn = Some(bidder);
    room.status = format!(
        "{} holds the bid at {} and names trump",
        room.player(bidder).display_name,
        amount
    );
}
