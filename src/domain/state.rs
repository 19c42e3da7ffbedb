//! The Room/Game/Player aggregate plus seat and turn arithmetic.
//!
//! One `Room` is the whole unit of play: the caller loads it, passes it by
//! mutable reference into exactly one engine operation at a time, then
//! persists and broadcasts it. Seat order interleaves the partnerships:
//! seat 0 = Team 1 player 1, seat 1 = Team 2 player 1, seat 2 = Team 1
//! player 2, seat 3 = Team 2 player 2.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Suit};
use crate::domain::rules::PLAYERS;
use crate::errors::GameError;

pub type PlayerId = i64;
pub type Seat = u8; // 0..=3

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Room assembled but no deal yet.
    Init,
    /// Players bid in fixed turn order for the right to name trump.
    Bidding,
    /// Winning bidder names the trump suit.
    TrumpSelect,
    /// Bidder holds the stock and must discard down to six.
    Discard,
    /// Trick play within the round.
    Trick,
    /// Round settled; awaiting redeal.
    RoundOver,
    /// A partnership reached the target score.
    GameOver,
}

/// One of the two partnerships.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }

    pub fn other(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    pub fn seats(self) -> [Seat; 2] {
        match self {
            Team::One => [0, 2],
            Team::Two => [1, 3],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Team::One => "Team 1",
            Team::Two => "Team 2",
        }
    }
}

/// Partnership a seat belongs to: even seats are Team 1, odd seats Team 2.
pub fn team_of(seat: Seat) -> Team {
    if seat % 2 == 0 {
        Team::One
    } else {
        Team::Two
    }
}

/// What a seat has put on the table for the current trick.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TablePlay {
    Card(Card),
    /// Empty-handed seat that explicitly went out for the trick.
    Out,
}

/// The standing bid, tagged with its owning seat AND partnership so the
/// bidder's side is never re-derived from seat arithmetic downstream.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct BidRecord {
    pub seat: Seat,
    pub team: Team,
    pub amount: u8,
}

/// One seated player. The hand is exclusively owned here and only mutated
/// by deal, reshape, discard, and card-play operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub is_ready: bool,
    /// Sorted ascending at all times.
    pub hand: Vec<Card>,
    pub played: Option<TablePlay>,
}

impl Player {
    pub fn new(id: PlayerId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            is_ready: false,
            hand: Vec::new(),
            played: None,
        }
    }

    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }
}

/// One active deal: stock, standing bid, trump, trick in progress, and the
/// two partnerships' running points and cumulative scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    /// Undealt cards, drawn from the front.
    pub stock: Vec<Card>,
    /// Standing bid, if any.
    pub bid: Option<BidRecord>,
    pub trump: Option<Suit>,
    /// Effective suit of the first card of the current trick.
    pub led: Option<Suit>,
    /// Seat that led the current trick.
    pub leader: Option<Seat>,
    /// Seat expected to act; `None` when nobody can (Init, RoundOver, GameOver).
    pub turn: Option<Seat>,
    /// Points taken this round, indexed by `Team::index`.
    pub points_round: [i16; 2],
    /// Cumulative scores across rounds, indexed by `Team::index`.
    pub scores: [i16; 2],
    /// True once every seat holds exactly six cards after the reshape.
    pub hands_set: bool,
}

impl GameState {
    pub fn inactive() -> Self {
        Self {
            phase: Phase::Init,
            stock: Vec::new(),
            bid: None,
            trump: None,
            led: None,
            leader: None,
            turn: None,
            points_round: [0, 0],
            scores: [0, 0],
            hands_set: false,
        }
    }

    /// Standing bid amount; zero when nobody has bid.
    pub fn current_bid(&self) -> u8 {
        self.bid.map_or(0, |b| b.amount)
    }
}

/// Room aggregate: four seats in rotation order, the dealer, a rotating
/// status line, and the current game. Outlives any single game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub players: [Player; PLAYERS],
    pub dealer: Option<Seat>,
    pub status: String,
    pub game: GameState,
}

impl Room {
    pub fn new(id: i64, players: [Player; PLAYERS]) -> Self {
        Self {
            id,
            players,
            dealer: None,
            status: String::new(),
            game: GameState::inactive(),
        }
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat as usize]
    }

    pub fn partnership(&self, team: Team) -> [&Player; 2] {
        let [a, b] = team.seats();
        [self.player(a), self.player(b)]
    }

    pub fn all_ready(&self) -> bool {
        self.players.iter().all(|p| p.is_ready)
    }

    pub fn all_hands_empty(&self) -> bool {
        self.players.iter().all(|p| p.hand.is_empty())
    }
}

/// Next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % PLAYERS as Seat
}

/// First seat after `from` whose player still holds cards, probing at most
/// one full rotation. `None` means every hand is empty (terminal state).
pub fn advance_to_next_with_cards(room: &Room, from: Seat) -> Option<Seat> {
    let mut seat = from;
    for _ in 0..PLAYERS {
        seat = next_seat(seat);
        if !room.player(seat).hand.is_empty() {
            return Some(seat);
        }
    }
    None
}

/// Seat of the given player id, `None` if they are not seated here.
pub fn seat_of_player(room: &Room, player_id: PlayerId) -> Option<Seat> {
    room.players
        .iter()
        .position(|p| p.id == player_id)
        .map(|i| i as Seat)
}

pub(crate) fn require_phase(game: &GameState, expected: Phase) -> Result<(), GameError> {
    if game.phase != expected {
        return Err(GameError::PhaseMismatch {
            expected,
            actual: game.phase,
        });
    }
    Ok(())
}

pub(crate) fn require_seat(seat: Seat) -> Result<usize, GameError> {
    if (seat as usize) < PLAYERS {
        Ok(seat as usize)
    } else {
        Err(GameError::not_found(format!("seat {seat}")))
    }
}

pub(crate) fn require_turn(game: &GameState) -> Result<Seat, GameError> {
    game.turn
        .ok_or_else(|| GameError::validation("Invariant violated: no active seat"))
}

pub(crate) fn require_active(game: &GameState, seat: Seat) -> Result<(), GameError> {
    if require_turn(game)? != seat {
        return Err(GameError::NotActivePlayer { seat });
    }
    Ok(())
}

pub(crate) fn require_dealer(room: &Room) -> Result<Seat, GameError> {
    room.dealer
        .ok_or_else(|| GameError::validation("Invariant violated: dealer must be set"))
}

pub(crate) fn require_trump(game: &GameState) -> Result<Suit, GameError> {
    game.trump
        .ok_or_else(|| GameError::validation("Invariant violated: trump must be set"))
}

pub(crate) fn require_bid(game: &GameState) -> Result<BidRecord, GameError> {
    game.bid
        .ok_or_else(|| GameError::validation("Invariant violated: bid must be set"))
}
