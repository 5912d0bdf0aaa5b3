//! Stuck tiles and the leave adjustment
//!
//! A tile is stuck when none of its holder's generated candidates uses it.
//! Stuck tiles will likely still be on the rack when the game ends, so
//! their value tends to transfer to the opponent.

use crate::moves::Move;
use crate::tiles::{LetterValues, Rack, Tile, MAX_ALPHABET_SIZE};

/// Share of the stuck value transferred when exactly one side is stuck.
const STUCK_TRANSFER_ONE_SIDE: f32 = 2.0;
/// Share of the stuck value transferred when both sides are stuck.
const STUCK_TRANSFER_BOTH_SIDES: f32 = 1.0;
/// Weight of the free side's own leave (it moves first, so weighs more).
const FIRST_MOVER_WEIGHT: f32 = 1.75;
/// Weight of the stuck side's playable tiles.
const SECOND_MOVER_WEIGHT: f32 = 1.25;

/// Tiles on `rack` that appear in none of `plays`.
///
/// Blanks are matched by intrinsic index, so a placed blank marks the
/// rack's blank as playable whatever letter it stands for.
#[must_use]
pub fn compute_stuck(plays: &[Move], rack: &Rack) -> Vec<Tile> {
    let mut played = [false; MAX_ALPHABET_SIZE];
    for play in plays {
        for t in play.tiles() {
            played[t.intrinsic()] = true;
        }
    }
    rack.tiles()
        .into_iter()
        .filter(|t| !played[t.intrinsic()])
        .collect()
}

/// Estimated end-of-game rack swing for the side to move after both sides'
/// next plays leave `my_leave` and `opp_leave`.
///
/// With nobody stuck the mover is assumed to go out next turn: it collects
/// twice the opponent's leave and pays its own, or loses twice its leave if
/// the opponent already went out. With stuck tiles, their value flows to
/// the other side, offset by what each side can still one-tile off.
#[must_use]
pub fn leave_adjustment(
    my_leave: &[Tile],
    opp_leave: &[Tile],
    my_stuck: &[Tile],
    opp_stuck: &[Tile],
    values: &LetterValues,
) -> f32 {
    let my_value = values.word_score(my_leave) as f32;
    let opp_value = values.word_score(opp_leave) as f32;

    if my_stuck.is_empty() && opp_stuck.is_empty() {
        return if opp_leave.is_empty() {
            -2.0 * my_value
        } else {
            my_value + 2.0 * opp_value
        };
    }

    let transfer = if !my_stuck.is_empty() && !opp_stuck.is_empty() {
        STUCK_TRANSFER_BOTH_SIDES
    } else {
        STUCK_TRANSFER_ONE_SIDE
    };

    let mut opp_adjustment = 0.0;
    if !my_stuck.is_empty() {
        let stuck_value = values.word_score(my_stuck) as f32;
        opp_adjustment = transfer * stuck_value + FIRST_MOVER_WEIGHT * opp_value
            - SECOND_MOVER_WEIGHT * (my_value - stuck_value);
    }

    let mut my_adjustment = 0.0;
    if !opp_stuck.is_empty() {
        let stuck_value = values.word_score(opp_stuck) as f32;
        my_adjustment = transfer * stuck_value + FIRST_MOVER_WEIGHT * my_value
            - SECOND_MOVER_WEIGHT * (opp_value - stuck_value);
    }

    my_adjustment - opp_adjustment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn tiles(ls: &[u8]) -> Vec<Tile> {
        ls.iter().map(|&l| Tile::letter(l)).collect()
    }

    fn play(letters: &[u8]) -> Move {
        let word: Vec<_> = letters.iter().map(|&l| Some(Tile::letter(l))).collect();
        Move::placement(Square::new(0, 0), false, &word, 1, vec![])
    }

    /// Values: letter n is worth n points.
    fn linear_values() -> LetterValues {
        LetterValues::from_slice(&(0..10).collect::<Vec<i32>>())
    }

    #[test]
    fn test_stuck_tiles_are_unused_ones() {
        let rack = Rack::from_tiles(&tiles(&[1, 2, 3, 3]));
        let plays = vec![play(&[1]), play(&[2, 1])];
        assert_eq!(compute_stuck(&plays, &rack), tiles(&[3, 3]));
    }

    #[test]
    fn test_used_tiles_never_stuck() {
        let rack = Rack::from_tiles(&tiles(&[1, 2, 3]));
        let plays = vec![play(&[1, 2, 3])];
        assert!(compute_stuck(&plays, &rack).is_empty());
    }

    #[test]
    fn test_no_plays_means_everything_stuck() {
        let rack = Rack::from_tiles(&tiles(&[4, 5]));
        assert_eq!(compute_stuck(&[Move::pass(tiles(&[4, 5]))], &rack), tiles(&[4, 5]));
    }

    #[test]
    fn test_placed_blank_frees_rack_blank() {
        let rack = Rack::from_tiles(&[Tile::BLANK, Tile::letter(4)]);
        let blank_play = Move::placement(
            Square::new(0, 0),
            false,
            &[Some(Tile::designated_blank(7))],
            0,
            vec![],
        );
        assert_eq!(compute_stuck(&[blank_play], &rack), tiles(&[4]));
    }

    #[test]
    fn test_adjustment_nobody_stuck() {
        let lv = linear_values();
        // 3 + 2 * 4
        assert_eq!(leave_adjustment(&tiles(&[3]), &tiles(&[4]), &[], &[], &lv), 11.0);
        // Opponent went out: lose twice my leave
        assert_eq!(leave_adjustment(&tiles(&[3]), &[], &[], &[], &lv), -6.0);
    }

    #[test]
    fn test_adjustment_only_me_stuck() {
        let lv = linear_values();
        let my_leave = tiles(&[5, 2]);
        let opp_leave = tiles(&[4]);
        // opp_adj = 2*5 + 1.75*4 - 1.25*(7 - 5) = 10 + 7 - 2.5 = 14.5
        let adj = leave_adjustment(&my_leave, &opp_leave, &tiles(&[5]), &[], &lv);
        assert_eq!(adj, -14.5);
    }

    #[test]
    fn test_adjustment_only_opponent_stuck() {
        let lv = linear_values();
        let my_leave = tiles(&[2]);
        let opp_leave = tiles(&[6, 1]);
        // my_adj = 2*6 + 1.75*2 - 1.25*(7 - 6) = 12 + 3.5 - 1.25 = 14.25
        let adj = leave_adjustment(&my_leave, &opp_leave, &[], &tiles(&[6]), &lv);
        assert_eq!(adj, 14.25);
    }

    #[test]
    fn test_adjustment_both_stuck() {
        let lv = linear_values();
        let my_leave = tiles(&[3, 1]);
        let opp_leave = tiles(&[2, 2]);
        // my_adj  = 1*4 + 1.75*4 - 1.25*(4 - 4) = 11
        // opp_adj = 1*3 + 1.75*4 - 1.25*(4 - 3) = 8.75
        let adj = leave_adjustment(&my_leave, &opp_leave, &tiles(&[3]), &tiles(&[2, 2]), &lv);
        assert_eq!(adj, 2.25);
    }
}
