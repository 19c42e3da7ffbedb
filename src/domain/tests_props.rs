//! Property tests over seeds and suits (pure domain, no I/O).

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::bidding::{pass_bid, submit_bid};
use crate::domain::cards_logic::{is_trump, trump_rank};
use crate::domain::cards_types::{Card, Suit};
use crate::domain::dealing::deal_new_round;
use crate::domain::rules::HAND_SIZE;
use crate::domain::state::Phase;
use crate::domain::test_gens::{self, c};
use crate::domain::test_state_helpers::{bid, make_lobby_room, make_room, RoomArgs};
use crate::domain::tricks::play_card;
use crate::domain::trump::declare_trump;
use crate::errors::GameError;

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    /// Every seed deals a permutation of the 54-card domain.
    #[test]
    fn prop_deal_is_always_a_permutation(seed in test_gens::seed()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut room = make_lobby_room();
        deal_new_round(&mut room, &mut rng).unwrap();

        let mut seen: HashSet<u8> = HashSet::new();
        for p in &room.players {
            prop_assert_eq!(p.hand.len(), 9);
            seen.extend(p.hand.iter().map(|card| card.value()));
        }
        seen.extend(room.game.stock.iter().map(|card| card.value()));
        prop_assert_eq!(room.game.stock.len(), 18);
        prop_assert_eq!(seen.len(), 54);
    }

    /// After any declaration, non-bidders hold max(kept trump, 6) cards,
    /// the stock is gone, and the bidder absorbed whatever was left.
    #[test]
    fn prop_reshape_sizes_balance(seed in test_gens::seed(), suit_index in 0u8..4) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut room = make_lobby_room();
        deal_new_round(&mut room, &mut rng).unwrap();

        let dealer = room.dealer.unwrap();
        while room.game.phase == Phase::Bidding {
            let seat = room.game.turn.unwrap();
            if seat == dealer {
                submit_bid(&mut room, seat, 3).unwrap();
            } else {
                pass_bid(&mut room, seat).unwrap();
            }
        }

        let trump = Suit::try_from(suit_index).unwrap();
        let kept: Vec<usize> = room
            .players
            .iter()
            .map(|p| p.hand.iter().filter(|&&card| is_trump(card, trump)).count())
            .collect();

        declare_trump(&mut room, dealer, suit_index).unwrap();

        let mut drawn = 0usize;
        for seat in 0..4 {
            if seat == dealer as usize {
                continue;
            }
            let len = room.players[seat].hand.len();
            prop_assert_eq!(len, kept[seat].max(HAND_SIZE), "seat {}", seat);
            drawn += HAND_SIZE.saturating_sub(kept[seat]);
            // Whatever the filter kept is still effective trump.
            let trump_in_hand = room.players[seat]
                .hand
                .iter()
                .filter(|&&card| is_trump(card, trump))
                .count();
            prop_assert!(trump_in_hand >= kept[seat].min(HAND_SIZE));
        }
        prop_assert!(room.game.stock.is_empty());
        prop_assert_eq!(room.players[dealer as usize].hand.len(), 9 + 18 - drawn);
    }

    /// The sixteen trump cards rank 1..=16 with no ties; everything else
    /// ranks not at all.
    #[test]
    fn prop_trump_order_is_total_over_sixteen_cards(suit in test_gens::suit()) {
        let mut ranks: Vec<u8> = Vec::new();
        let mut trump_cards = 0;
        for v in 1u8..=54 {
            match trump_rank(c(v), suit) {
                Some(r) => {
                    trump_cards += 1;
                    ranks.push(r);
                }
                None => prop_assert!(!is_trump(c(v), suit)),
            }
        }
        prop_assert_eq!(trump_cards, 16);
        ranks.sort();
        let expected: Vec<u8> = (1..=16).collect();
        prop_assert_eq!(ranks, expected);
    }

    /// A bid at or below the standing bid always fails.
    #[test]
    fn prop_bids_must_strictly_increase(standing in 1u8..10, lower in 0u8..10) {
        prop_assume!(lower <= standing);
        let mut room = make_room(
            [vec![c(1)], vec![c(2)], vec![c(3)], vec![c(4)]],
            RoomArgs {
                phase: Phase::Bidding,
                dealer: Some(0),
                turn: Some(1),
                ..Default::default()
            },
        );
        submit_bid(&mut room, 1, standing).unwrap();
        prop_assert_eq!(
            submit_bid(&mut room, 2, lower),
            Err(GameError::InvalidBid { current: standing })
        );
    }

    /// Holding effective trump under a trump lead pins the play to trump.
    #[test]
    fn prop_trump_lead_forces_trump_from_live_hands(
        trump in test_gens::suit(),
        trump_rank_pick in 0u8..13,
        off_rank in 1u8..=9,
        off_suit_step in 1u8..4,
    ) {
        let own = Card::new(trump.low() + trump_rank_pick).unwrap();
        let off_suit = Suit::try_from((trump.index() + off_suit_step) % 4).unwrap();
        let off = Card::new(off_suit.low() + off_rank - 1).unwrap();
        // Spare cards that can never collide with `own` or `off`
        let ace_of_off = Card::new(off_suit.low() + 12).unwrap();

        let mut hand = vec![own, off];
        hand.sort();
        let mut room = make_room(
            [hand, vec![Card::LITTLE_JOKER], vec![Card::BIG_JOKER], vec![ace_of_off]],
            RoomArgs {
                phase: Phase::Trick,
                dealer: Some(3),
                turn: Some(0),
                leader: Some(3),
                bid: Some(bid(3, 2)),
                trump: Some(trump),
                led: Some(trump),
                hands_set: true,
                ..Default::default()
            },
        );

        prop_assert_eq!(play_card(&mut room, 0, off), Err(GameError::MustFollowTrump));
        prop_assert!(play_card(&mut room, 0, own).is_ok());
    }
}
