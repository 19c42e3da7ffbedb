use crate::domain::state::{Phase, Room};
use crate::domain::test_gens::c;
use crate::domain::test_state_helpers::{bid, make_room, RoomArgs};
use crate::domain::trump::{declare_trump, set_discarded_hand};
use crate::errors::GameError;

/// Room poised for a Hearts declaration by seat 0 (the bid holder).
///
/// Hand layout (all 54 cards accounted for):
/// - seat 0 (bidder): nine Clubs, 1..=9
/// - seat 1: two Hearts (27, 28) among junk
/// - seat 2: off-jack 23 plus both jokers among junk
/// - seat 3: no effective Hearts at all
/// - stock front: 29..=39 then 21, 22, 24, 25, 26, 51, 52
fn trump_select_room() -> Room {
    make_room(
        [
            vec![c(1), c(2), c(3), c(4), c(5), c(6), c(7), c(8), c(9)],
            vec![c(27), c(28), c(10), c(11), c(12), c(14), c(15), c(40), c(41)],
            vec![c(23), c(53), c(54), c(16), c(17), c(42), c(43), c(44), c(45)],
            vec![c(13), c(18), c(19), c(20), c(46), c(47), c(48), c(49), c(50)],
        ],
        RoomArgs {
            phase: Phase::TrumpSelect,
            dealer: Some(0),
            turn: Some(0),
            bid: Some(bid(0, 3)),
            stock: [29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 21, 22, 24, 25, 26, 51, 52]
                .into_iter()
                .map(c)
                .collect(),
            ..Default::default()
        },
    )
}

#[test]
fn reshape_filters_non_bidders_and_tops_up_to_six() {
    let mut room = trump_select_room();
    declare_trump(&mut room, 0, 2).unwrap();

    // seat 1 kept 27, 28 and drew 29..=32
    assert_eq!(room.players[1].hand, vec![c(27), c(28), c(29), c(30), c(31), c(32)]);
    // seat 2 kept off-jack and jokers, drew 33..=35
    assert_eq!(room.players[2].hand, vec![c(23), c(33), c(34), c(35), c(53), c(54)]);
    // seat 3 kept nothing and drew six straight off the stock front
    assert_eq!(room.players[3].hand, vec![c(21), c(22), c(36), c(37), c(38), c(39)]);
}

#[test]
fn bidder_takes_the_remaining_stock_unfiltered() {
    let mut room = trump_select_room();
    declare_trump(&mut room, 0, 2).unwrap();

    // 9 original Clubs plus the 5 cards the top-ups left behind
    assert_eq!(room.players[0].hand.len(), 14);
    for v in [24, 25, 26, 51, 52] {
        assert!(room.players[0].holds(c(v)), "kitty card {v}");
    }
    assert!(room.game.stock.is_empty());
    assert_eq!(room.game.phase, Phase::Discard);
    assert_eq!(room.game.turn, Some(0));
    assert!(!room.game.hands_set);
}

#[test]
fn trump_suit_index_is_validated() {
    let mut room = trump_select_room();
    assert_eq!(declare_trump(&mut room, 0, 4), Err(GameError::InvalidSuit(4)));
    assert_eq!(room.game.trump, None, "failed declaration mutates nothing");
}

#[test]
fn only_the_bid_holder_declares() {
    let mut room = trump_select_room();
    assert_eq!(
        declare_trump(&mut room, 1, 2),
        Err(GameError::NotActivePlayer { seat: 1 })
    );
}

#[test]
fn declaration_requires_trump_select_phase() {
    let mut room = trump_select_room();
    room.game.phase = Phase::Bidding;
    assert!(matches!(
        declare_trump(&mut room, 0, 2),
        Err(GameError::PhaseMismatch { .. })
    ));
}

#[test]
fn discard_locks_hands_and_gives_the_bidder_the_lead() {
    let mut room = trump_select_room();
    declare_trump(&mut room, 0, 2).unwrap();

    let keep: Vec<_> = [1, 2, 3, 4, 5, 6].into_iter().map(c).collect();
    set_discarded_hand(&mut room, 0, keep.clone()).unwrap();

    assert_eq!(room.players[0].hand, keep);
    assert!(room.game.hands_set);
    assert_eq!(room.game.phase, Phase::Trick);
    assert_eq!(room.game.turn, Some(0));
    assert_eq!(room.game.leader, Some(0));
    assert!(room.players.iter().all(|p| p.hand.len() == 6));
}

#[test]
fn discard_must_be_exactly_six_cards() {
    let mut room = trump_select_room();
    declare_trump(&mut room, 0, 2).unwrap();

    // Undersized is a plain validation failure, not an overflow.
    let err = set_discarded_hand(&mut room, 0, vec![c(1), c(2), c(3), c(4), c(5)]).unwrap_err();
    assert_eq!(
        err,
        GameError::Validation("discarded hand must be exactly 6 cards".into())
    );

    let seven: Vec<_> = [1, 2, 3, 4, 5, 6, 7].into_iter().map(c).collect();
    let err = set_discarded_hand(&mut room, 0, seven).unwrap_err();
    assert_eq!(err, GameError::HandOverflow { len: 7, max: 6 });

    assert_eq!(room.players[0].hand.len(), 14, "failed discards mutate nothing");
}

#[test]
fn discard_must_come_from_the_held_hand() {
    let mut room = trump_select_room();
    declare_trump(&mut room, 0, 2).unwrap();
    // 40 sits in seat 1's hand, not the bidder's
    let err =
        set_discarded_hand(&mut room, 0, vec![c(1), c(2), c(3), c(4), c(5), c(40)]).unwrap_err();
    assert_eq!(err, GameError::CardNotHeld(c(40)));
}

#[test]
fn discard_rejects_repeated_cards() {
    let mut room = trump_select_room();
    declare_trump(&mut room, 0, 2).unwrap();
    let err =
        set_discarded_hand(&mut room, 0, vec![c(1), c(1), c(2), c(3), c(4), c(5)]).unwrap_err();
    assert!(matches!(err, GameError::Validation(_)));
}

#[test]
fn non_bidder_overflowing_with_trump_also_discards() {
    // Give seat 1 seven Hearts so the filter keeps more than six.
    let mut room = make_room(
        [
            vec![c(1), c(2), c(3), c(4), c(5), c(6), c(7), c(8), c(9)],
            vec![c(27), c(28), c(29), c(30), c(31), c(32), c(33), c(40), c(41)],
            vec![c(23), c(53), c(54), c(16), c(17), c(42), c(43), c(44), c(45)],
            vec![c(13), c(18), c(19), c(20), c(46), c(47), c(48), c(49), c(50)],
        ],
        RoomArgs {
            phase: Phase::TrumpSelect,
            dealer: Some(0),
            turn: Some(0),
            bid: Some(bid(0, 3)),
            stock: [34, 35, 36, 37, 38, 39, 10, 11, 12, 14, 15, 21, 22, 24, 25, 26, 51, 52]
                .into_iter()
                .map(c)
                .collect(),
            ..Default::default()
        },
    );
    declare_trump(&mut room, 0, 2).unwrap();

    assert_eq!(room.players[1].hand.len(), 7, "filter never shrinks below keeps");
    assert!(!room.game.hands_set);

    // Both oversized hands reduce; only then do hands lock.
    let keep1: Vec<_> = [27, 28, 29, 30, 31, 32].into_iter().map(c).collect();
    set_discarded_hand(&mut room, 1, keep1).unwrap();
    assert!(!room.game.hands_set, "bidder still holds the kitty");

    let keep0: Vec<_> = [1, 2, 3, 4, 5, 6].into_iter().map(c).collect();
    set_discarded_hand(&mut room, 0, keep0).unwrap();
    assert!(room.game.hands_set);
    assert_eq!(room.game.phase, Phase::Trick);
}
