//! Public views of the room aggregate for persistence and broadcast.
//!
//! [`room_snapshot`] carries only seat-public data (counts, plays, scores);
//! [`player_view`] layers one seat's own hand on top for that client.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Suit};
use crate::domain::state::{BidRecord, Phase, PlayerId, Room, Seat, TablePlay};
use crate::errors::GameError;

/// Public info about one seat: everything but the hand itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub seat: Seat,
    pub player_id: PlayerId,
    pub display_name: String,
    pub is_ready: bool,
    pub card_count: usize,
    pub played: Option<TablePlay>,
}

/// Seat-public snapshot of the whole room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub room_id: i64,
    pub status: String,
    pub phase: Phase,
    pub dealer: Option<Seat>,
    pub turn: Option<Seat>,
    pub bid: Option<BidRecord>,
    pub trump: Option<Suit>,
    pub led: Option<Suit>,
    pub stock_count: usize,
    pub points_round: [i16; 2],
    pub scores: [i16; 2],
    pub players: Vec<PlayerPublic>,
}

/// A snapshot plus the viewing seat's own hand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub room: RoomSnapshot,
}

pub fn room_snapshot(room: &Room) -> RoomSnapshot {
    RoomSnapshot {
        room_id: room.id,
        status: room.status.clone(),
        phase: room.game.phase,
        dealer: room.dealer,
        turn: room.game.turn,
        bid: room.game.bid,
        trump: room.game.trump,
        led: room.game.led,
        stock_count: room.game.stock.len(),
        points_round: room.game.points_round,
        scores: room.game.scores,
        players: room
            .players
            .iter()
            .enumerate()
            .map(|(seat, p)| PlayerPublic {
                seat: seat as Seat,
                player_id: p.id,
                display_name: p.display_name.clone(),
                is_ready: p.is_ready,
                card_count: p.card_count(),
                played: p.played,
            })
            .collect(),
    }
}

pub fn player_view(room: &Room, seat: Seat) -> Result<PlayerView, GameError> {
    if seat as usize >= room.players.len() {
        return Err(GameError::not_found(format!("seat {seat}")));
    }
    Ok(PlayerView {
        seat,
        hand: room.player(seat).hand.clone(),
        room: room_snapshot(room),
    })
}
