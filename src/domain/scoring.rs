//! Trick settlement, round settlement, and game-over detection.

use tracing::info;

use crate::domain::cards_logic::{card_points, trump_rank, PointAward};
use crate::domain::cards_types::Card;
use crate::domain::rules::TARGET_SCORE;
use crate::domain::state::{
    advance_to_next_with_cards, team_of, Phase, Room, Seat, TablePlay, Team,
};

/// Settle a completed trick: award the immediate deuce point, pool the rest
/// for the winner, hand the lead to the winner, and clear the table. When
/// the last cards just went down this rolls straight into round settlement.
pub(crate) fn settle_trick(room: &mut Room) {
    let Some(trump) = room.game.trump else {
        return;
    };

    let plays: Vec<(Seat, Card)> = room
        .players
        .iter()
        .enumerate()
        .filter_map(|(s, p)| match p.played {
            Some(TablePlay::Card(c)) => Some((s as Seat, c)),
            _ => None,
        })
        .collect();

    let mut pooled: i16 = 0;
    for &(seat, card) in &plays {
        match card_points(card, trump) {
            // The trump deuce pays its own side no matter who takes the trick.
            Some(PointAward::Immediate(n)) => {
                room.game.points_round[team_of(seat).index()] += n;
            }
            Some(PointAward::Pooled(n)) => pooled += n,
            None => {}
        }
    }

    let winner = plays
        .iter()
        .filter_map(|&(s, c)| trump_rank(c, trump).map(|r| (r, s)))
        .max_by_key(|&(r, _)| r)
        .map(|(_, s)| s);

    match winner {
        Some(w) => {
            let team = team_of(w);
            room.game.points_round[team.index()] += pooled;
            let next = if room.player(w).hand.is_empty() {
                advance_to_next_with_cards(room, w)
            } else {
                Some(w)
            };
            room.game.turn = next;
            room.game.leader = next;
            room.status = format!("{} takes the trick", team.name());
            info!(room_id = room.id, winner = w, pooled, "trick settled");
        }
        None => {
            // No trump hit the table: nothing scores and the lead stays put.
            let next = room.game.leader.and_then(|l| {
                if room.player(l).hand.is_empty() {
                    advance_to_next_with_cards(room, l)
                } else {
                    Some(l)
                }
            });
            room.game.turn = next;
            room.game.leader = next;
            room.status = "No trump played; the trick scores nothing".to_string();
            info!(room_id = room.id, "trick settled without a winner");
        }
    }

    for p in &mut room.players {
        p.played = None;
    }
    room.game.led = None;

    if room.all_hands_empty() {
        settle_round(room);
    }
}

/// Apply bid fulfillment at the end of a round: the bidding partnership
/// banks its points if it met the bid, otherwise it is set back by the bid;
/// the other partnership always banks its own points.
pub(crate) fn settle_round(room: &mut Room) {
    let Some(bid) = room.game.bid else {
        return;
    };
    let bt = bid.team.index();
    let ot = bid.team.other().index();

    let made = room.game.points_round[bt] >= bid.amount as i16;
    if made {
        room.game.scores[bt] += room.game.points_round[bt];
    } else {
        room.game.scores[bt] -= bid.amount as i16;
    }
    room.game.scores[ot] += room.game.points_round[ot];

    room.game.turn = None;
    room.game.leader = None;

    match winning_team_inner(room) {
        Some(team) => {
            room.game.phase = Phase::GameOver;
            room.status = format!(
                "{} wins the game {} to {}",
                team.name(),
                room.game.scores[team.index()],
                room.game.scores[team.other().index()]
            );
            info!(room_id = room.id, winner = team.name(), "game over");
        }
        None => {
            room.game.phase = Phase::RoundOver;
            room.status = if made {
                format!(
                    "{} made their bid of {} with {} points",
                    bid.team.name(),
                    bid.amount,
                    room.game.points_round[bt]
                )
            } else {
                format!("{} were set back {}", bid.team.name(), bid.amount)
            };
            info!(room_id = room.id, made, "round settled");
        }
    }
}

/// Winning partnership once the game is over. Ties at the target favor the
/// side that held the bid.
pub fn winning_team(room: &Room) -> Option<Team> {
    if room.game.phase != Phase::GameOver {
        return None;
    }
    winning_team_inner(room)
}

fn winning_team_inner(room: &Room) -> Option<Team> {
    let bid_team = room.game.bid.map(|b| b.team);
    // Check the bidding side first so a simultaneous crossing goes its way.
    let (first, second) = match bid_team {
        Some(t) => (t, t.other()),
        None => (Team::One, Team::Two),
    };
    if room.game.scores[first.index()] >= TARGET_SCORE {
        return Some(first);
    }
    if room.game.scores[second.index()] >= TARGET_SCORE {
        return Some(second);
    }
    None
}
