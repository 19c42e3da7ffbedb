//! Trump-driven card logic: effective suit, the 16-slot trump rank order,
//! and the point value of each trump card.

use crate::domain::cards_types::{Card, Suit};

/// Suit a card plays as once trump is known: jokers and the off-suit jack
/// count as trump, everything else keeps its natural suit.
pub fn effective_suit(card: Card, trump: Suit) -> Suit {
    if card.is_joker() || card == trump.off_jack() {
        return trump;
    }
    card.suit().unwrap_or(trump)
}

pub fn is_trump(card: Card, trump: Suit) -> bool {
    effective_suit(card, trump) == trump
}

pub fn hand_has_trump(hand: &[Card], trump: Suit) -> bool {
    hand.iter().any(|&c| is_trump(c, trump))
}

/// Position of a card in the trump order, 1 (low) ..= 16 (high):
///
/// own "2".."10" (1..=9), Little Joker (10), Big Joker (11),
/// off-suit jack (12), own Jack/Queen/King/Ace (13..=16).
///
/// `None` for cards outside the trump suit; they never win a trick.
pub fn trump_rank(card: Card, trump: Suit) -> Option<u8> {
    if card == Card::LITTLE_JOKER {
        return Some(10);
    }
    if card == Card::BIG_JOKER {
        return Some(11);
    }
    if card == trump.off_jack() {
        return Some(12);
    }
    if card.suit() != Some(trump) {
        return None;
    }
    let rank = card.rank();
    // "2".."10" keep their rank; Jack..Ace shift past jokers and off-jack.
    Some(if rank <= 9 { rank } else { rank + 3 })
}

/// How a trump card scores when it hits the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PointAward {
    /// Credited to the partnership that played the card, win or lose.
    Immediate(i16),
    /// Pooled into the trick and credited to the winning partnership.
    Pooled(i16),
}

/// Point value of a card under the given trump; `None` for non-trump cards
/// and trump cards that carry no points.
pub fn card_points(card: Card, trump: Suit) -> Option<PointAward> {
    match trump_rank(card, trump)? {
        1 => Some(PointAward::Immediate(1)),             // own "2"
        2 => Some(PointAward::Pooled(3)),                // own "3"
        9 | 10 | 11 | 12 | 13 | 16 => Some(PointAward::Pooled(1)), // "10", jokers, jacks, Ace
        _ => None,
    }
}
