//! Core card types: the 54-card integer domain, suits, jokers, off-jack.
//!
//! Cards are the integers 1..=54:
//! - 1..=13  Clubs, 14..=26 Diamonds, 27..=39 Hearts, 40..=52 Spades,
//!   with rank-within-suit 1 == "2" up to 13 == "Ace";
//! - 53 Little Joker, 54 Big Joker.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::rules::SUIT_SPAN;
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn index(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    /// The jack of the same color, opposite suit: it counts as trump and
    /// ranks just above the own-suit ten, below the jokers.
    pub fn off_jack(self) -> Card {
        match self {
            Suit::Clubs => Card(49),    // Spade jack
            Suit::Diamonds => Card(36), // Heart jack
            Suit::Hearts => Card(23),   // Diamond jack
            Suit::Spades => Card(10),   // Club jack
        }
    }

    /// Lowest card value of this suit's 13-card range.
    pub fn low(self) -> u8 {
        SUIT_SPAN * self.index() + 1
    }
}

impl TryFrom<u8> for Suit {
    type Error = GameError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Suit::Clubs),
            1 => Ok(Suit::Diamonds),
            2 => Ok(Suit::Hearts),
            3 => Ok(Suit::Spades),
            other => Err(GameError::InvalidSuit(other)),
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// One card of the 54-card domain, by integer identity.
///
/// Ord is plain integer order, which sorts a hand by suit block then rank;
/// trick resolution must go through [`crate::domain::cards_logic::trump_rank`]
/// instead.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Card(pub(crate) u8);

impl Card {
    pub const LITTLE_JOKER: Card = Card(53);
    pub const BIG_JOKER: Card = Card(54);

    pub fn new(value: u8) -> Result<Self, GameError> {
        if (1..=54).contains(&value) {
            Ok(Card(value))
        } else {
            Err(GameError::validation(format!(
                "card value out of range: {value}"
            )))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_joker(self) -> bool {
        self.0 > 52
    }

    /// Natural suit of the card; `None` for the jokers.
    pub fn suit(self) -> Option<Suit> {
        if self.is_joker() {
            return None;
        }
        match (self.0 - 1) / SUIT_SPAN {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            _ => Some(Suit::Spades),
        }
    }

    /// Rank within the suit, 1..=13 where 1 == "2" and 13 == "Ace".
    /// Meaningless for jokers.
    pub fn rank(self) -> u8 {
        (self.0 - 1) % SUIT_SPAN + 1
    }

    fn rank_label(self) -> &'static str {
        match self.rank() {
            1 => "2",
            2 => "3",
            3 => "4",
            4 => "5",
            5 => "6",
            6 => "7",
            7 => "8",
            8 => "9",
            9 => "10",
            10 => "Jack",
            11 => "Queen",
            12 => "King",
            _ => "Ace",
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match *self {
            Card::LITTLE_JOKER => f.write_str("Little Joker"),
            Card::BIG_JOKER => f.write_str("Big Joker"),
            card => match card.suit() {
                Some(suit) => write!(f, "{} of {}", card.rank_label(), suit),
                None => write!(f, "card {}", card.0),
            },
        }
    }
}
