//! Candidate valuation and horizon values
//!
//! Valuations only order candidates at a node; they never replace the
//! exact spread of a finished game. Two evaluators are provided:
//! - simple: score, a per-tile bonus far from the horizon, and the
//!   going-out bonus
//! - complex: score minus the opponent's best unblocked reply, plus the
//!   weighted leave adjustment from [`leave_adjustment`]

use crate::moves::{Move, MoveKind};
use crate::search::NodeValue;
use crate::tiles::{LetterValues, Rack};

use super::stuck::{compute_stuck, leave_adjustment};

/// Bonus per tile played when many plies remain.
const TILE_BONUS: i32 = 3;

/// Remaining depth above which the tile bonus applies.
const TILE_BONUS_DEPTH: usize = 2;

/// Going out collects twice the value of the opponent's rack.
const GOING_OUT_FACTOR: i32 = 2;

/// Whether `mv` empties a rack of `rack_len` tiles.
#[inline]
#[must_use]
pub fn plays_out(mv: &Move, rack_len: usize) -> bool {
    mv.kind() == MoveKind::Place && mv.tiles_played() == rack_len
}

/// Valuation of a move that ends the game by emptying the mover's rack.
#[inline]
#[must_use]
pub fn going_out_value(mv: &Move, opp_rack_value: i32) -> f32 {
    (mv.score() + GOING_OUT_FACTOR * opp_rack_value) as f32
}

/// Simple valuation of every candidate.
pub fn value_simple(
    plays: &mut [Move],
    rack_len: usize,
    opp_rack_value: i32,
    depth_remaining: usize,
) {
    for play in plays.iter_mut() {
        let v = if depth_remaining > TILE_BONUS_DEPTH {
            (play.score() + TILE_BONUS * play.tiles_played() as i32) as f32
        } else if plays_out(play, rack_len) {
            going_out_value(play, opp_rack_value)
        } else {
            play.score() as f32
        };
        play.set_valuation(v);
    }
}

/// Two-ply valuation of every candidate.
///
/// `replies` are the opponent's candidates in descending score order,
/// already capped and ending with a pass.
pub fn value_complex(
    plays: &mut [Move],
    replies: &[Move],
    rack: &Rack,
    opp_rack: &Rack,
    values: &LetterValues,
    future_adjustment: f32,
) {
    let my_stuck = compute_stuck(plays, rack);
    let reply_stuck = compute_stuck(replies, opp_rack);
    let opp_tiles = opp_rack.tiles();
    let opp_rack_value = opp_rack.score_on(values);
    let rack_len = rack.num_tiles();

    for play in plays.iter_mut() {
        if plays_out(play, rack_len) {
            let v = going_out_value(play, opp_rack_value);
            play.set_valuation(v);
            continue;
        }

        let (opp_score, opp_leave, opp_stuck) =
            match replies.iter().find(|reply| !play.blocks(reply)) {
                Some(reply) => (reply.score(), reply.leave(), reply_stuck.as_slice()),
                // Every reply blocked: the opponent keeps its whole rack, all of it stuck.
                None => (0, opp_tiles.as_slice(), opp_tiles.as_slice()),
            };

        let adjustment = leave_adjustment(play.leave(), opp_leave, &my_stuck, opp_stuck, values);
        let v = (play.score() - opp_score) as f32 + future_adjustment * adjustment;
        play.set_valuation(v);
    }
}

/// Stable sort, highest valuation first.
pub fn sort_by_valuation(plays: &mut [Move]) {
    plays.sort_by(|a, b| b.valuation().total_cmp(&a.valuation()));
}

/// Value of a node where the search stops.
///
/// `spread_delta` is the maximizer's spread change since the root. In
/// complex mode an unfinished line also carries the estimated future swing
/// of the last move, credited to whoever made it.
#[must_use]
pub fn horizon_value(
    spread_delta: i32,
    last_move: Option<&Move>,
    maximizer_moved: bool,
    game_over: bool,
    complex: bool,
    future_adjustment: f32,
) -> NodeValue {
    let mut value = spread_delta as f32;
    if game_over {
        return NodeValue {
            value,
            known_end: true,
        };
    }
    if complex {
        if let Some(mv) = last_move {
            let remainder = future_adjustment * (mv.valuation() - mv.score() as f32);
            if maximizer_moved {
                value += remainder;
            } else {
                value -= remainder;
            }
        }
    }
    NodeValue {
        value,
        known_end: false,
    }
}
