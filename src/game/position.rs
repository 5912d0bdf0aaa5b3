//! Reference game state with endgame rules
//!
//! Rules applied by [`Position::play_move`]:
//! - placed tiles leave the mover's rack and land on the board
//! - a move scoring zero counts as a scoreless turn; a scoring move resets the count
//! - emptying the rack ends the game; the mover gains twice the value of
//!   the opponent's rack
//! - reaching the scoreless-turn limit ends the game; each player loses the
//!   value of their own rack
//!
//! Exchanges leave the rack unchanged (there is nothing to draw).
//!
//! # Example
//!
//! ```
//! use endgame::board::{Board, Square};
//! use endgame::game::{GameState, Position};
//! use endgame::moves::Move;
//! use endgame::tiles::{LetterValues, Rack, Tile};
//!
//! let racks = [
//!     Rack::from_tiles(&[Tile::letter(1)]),
//!     Rack::from_tiles(&[Tile::letter(26)]),
//! ];
//! let mut pos = Position::new(Board::new(), racks, [0, 0], 0, LetterValues::english());
//!
//! let mv = Move::placement(Square::new(7, 7), false, &[Some(Tile::letter(1))], 2, vec![]);
//! pos.play_move(&mv);
//! assert!(pos.is_over());
//! assert_eq!(pos.spread_for(0), 2 + 2 * 10);
//!
//! pos.unplay_last_move();
//! assert!(!pos.is_over());
//! assert_eq!(pos.spread_for(0), 0);
//! ```

use super::GameState;
use crate::board::{Board, Square};
use crate::moves::{Move, MoveKind};
use crate::tiles::{LetterValues, Rack, Tile};

/// Scoreless-turn limit of a normal game.
pub const DEFAULT_MAX_SCORELESS_TURNS: u32 = 6;

/// Record of a move for undo
#[derive(Debug, Clone)]
struct UndoRecord {
    mover: usize,
    rack_before: Rack,
    scores: [i32; 2],
    scoreless_turns: u32,
    over: bool,
    placed: Vec<Square>,
}

/// Two-player game state with a stack-ordered undo log.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    racks: [Rack; 2],
    scores: [i32; 2],
    on_turn: usize,
    turn: usize,
    scoreless_turns: u32,
    max_scoreless_turns: u32,
    bag: Vec<Tile>,
    letter_values: LetterValues,
    over: bool,
    history: Vec<UndoRecord>,
}

impl Position {
    pub fn new(
        board: Board,
        racks: [Rack; 2],
        scores: [i32; 2],
        on_turn: usize,
        letter_values: LetterValues,
    ) -> Self {
        debug_assert!(on_turn < 2);
        Self {
            board,
            racks,
            scores,
            on_turn,
            turn: 0,
            scoreless_turns: 0,
            max_scoreless_turns: DEFAULT_MAX_SCORELESS_TURNS,
            bag: Vec::new(),
            letter_values,
            over: false,
            history: Vec::with_capacity(32),
        }
    }

    /// Put undrawn tiles in the bag.
    #[must_use]
    pub fn with_bag(mut self, tiles: Vec<Tile>) -> Self {
        self.bag = tiles;
        self
    }

    #[inline]
    pub fn scores(&self) -> [i32; 2] {
        self.scores
    }

    /// Depth of the undo stack.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl GameState for Position {
    fn board(&self) -> &Board {
        &self.board
    }

    fn rack_for(&self, player: usize) -> &Rack {
        &self.racks[player]
    }

    fn player_on_turn(&self) -> usize {
        self.on_turn
    }

    fn num_players(&self) -> usize {
        2
    }

    fn turn(&self) -> usize {
        self.turn
    }

    fn spread_for(&self, player: usize) -> i32 {
        self.scores[player] - self.scores[1 - player]
    }

    fn is_over(&self) -> bool {
        self.over
    }

    fn bag_remaining(&self) -> usize {
        self.bag.len()
    }

    fn letter_values(&self) -> &LetterValues {
        &self.letter_values
    }

    fn scoreless_turns(&self) -> u32 {
        self.scoreless_turns
    }

    fn max_scoreless_turns(&self) -> u32 {
        self.max_scoreless_turns
    }

    fn set_max_scoreless_turns(&mut self, turns: u32) {
        self.max_scoreless_turns = turns;
    }

    fn play_move(&mut self, mv: &Move) {
        debug_assert!(!self.over, "move played after game end");
        let mover = self.on_turn;
        let opp = 1 - mover;

        let mut record = UndoRecord {
            mover,
            rack_before: self.racks[mover].clone(),
            scores: self.scores,
            scoreless_turns: self.scoreless_turns,
            over: self.over,
            placed: Vec::with_capacity(mv.tiles_played()),
        };

        if mv.kind() == MoveKind::Place {
            for p in mv.placed() {
                self.board.place_tile(p.square, p.tile);
                self.racks[mover].take(p.tile);
                record.placed.push(p.square);
            }
        }

        self.scores[mover] += mv.score();
        if mv.score() > 0 {
            self.scoreless_turns = 0;
        } else {
            self.scoreless_turns += 1;
        }

        if mv.kind() == MoveKind::Place && self.racks[mover].is_empty() {
            self.over = true;
            self.scores[mover] += 2 * self.racks[opp].score_on(&self.letter_values);
        } else if self.scoreless_turns >= self.max_scoreless_turns {
            self.over = true;
            for p in 0..2 {
                self.scores[p] -= self.racks[p].score_on(&self.letter_values);
            }
        }

        self.history.push(record);
        self.on_turn = opp;
        self.turn += 1;
    }

    fn unplay_last_move(&mut self) {
        let Some(record) = self.history.pop() else {
            debug_assert!(false, "unplay with empty history");
            return;
        };
        for sq in &record.placed {
            self.board.remove_tile(*sq);
        }
        self.racks[record.mover] = record.rack_before;
        self.scores = record.scores;
        self.scoreless_turns = record.scoreless_turns;
        self.over = record.over;
        self.on_turn = record.mover;
        self.turn -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn racks(a: &[u8], b: &[u8]) -> [Rack; 2] {
        let to_rack =
            |ls: &[u8]| Rack::from_tiles(&ls.iter().map(|&l| Tile::letter(l)).collect::<Vec<_>>());
        [to_rack(a), to_rack(b)]
    }

    fn single(sq: Square, letter: u8, score: i32, leave: &[u8]) -> Move {
        Move::placement(
            sq,
            false,
            &[Some(Tile::letter(letter))],
            score,
            leave.iter().map(|&l| Tile::letter(l)).collect(),
        )
    }

    #[test]
    fn test_play_and_unplay_restore_everything() {
        // A=1 (1pt), E=5 (1pt), Q=17 (10pt)
        let mut pos = Position::new(
            Board::new(),
            racks(&[1, 5], &[17]),
            [100, 90],
            0,
            LetterValues::english(),
        );
        let before = pos.clone();

        pos.play_move(&single(Square::new(7, 7), 1, 8, &[5]));
        assert_eq!(pos.player_on_turn(), 1);
        assert_eq!(pos.turn(), 1);
        assert_eq!(pos.scores(), [108, 90]);
        assert_eq!(pos.rack_for(0).num_tiles(), 1);
        assert_eq!(pos.board().get(Square::new(7, 7)), Some(Tile::letter(1)));
        assert!(!pos.is_over());

        pos.unplay_last_move();
        assert_eq!(pos.board(), before.board());
        assert_eq!(pos.rack_for(0), before.rack_for(0));
        assert_eq!(pos.scores(), before.scores());
        assert_eq!(pos.player_on_turn(), 0);
        assert_eq!(pos.history_len(), 0);
    }

    #[test]
    fn test_going_out_bonus() {
        let mut pos = Position::new(
            Board::new(),
            racks(&[1], &[17, 5]),
            [0, 0],
            0,
            LetterValues::english(),
        );
        pos.play_move(&single(Square::new(7, 7), 1, 3, &[]));
        assert!(pos.is_over());
        // 3 + 2 * (10 + 1)
        assert_eq!(pos.scores(), [25, 0]);
    }

    #[test]
    fn test_scoreless_limit_penalty() {
        let mut pos = Position::new(
            Board::new(),
            racks(&[1, 5], &[17]),
            [50, 50],
            0,
            LetterValues::english(),
        );
        pos.set_max_scoreless_turns(2);

        pos.play_move(&Move::pass(vec![Tile::letter(1), Tile::letter(5)]));
        assert!(!pos.is_over());
        assert_eq!(pos.scoreless_turns(), 1);

        pos.play_move(&Move::pass(vec![Tile::letter(17)]));
        assert!(pos.is_over());
        assert_eq!(pos.scores(), [48, 40]);

        pos.unplay_last_move();
        assert!(!pos.is_over());
        assert_eq!(pos.scores(), [50, 50]);
        assert_eq!(pos.player_on_turn(), 1);
    }

    #[test]
    fn test_scoring_move_resets_scoreless_count() {
        let mut pos = Position::new(
            Board::new(),
            racks(&[1, 5], &[17, 5]),
            [0, 0],
            0,
            LetterValues::english(),
        );
        pos.play_move(&Move::pass(vec![Tile::letter(1), Tile::letter(5)]));
        assert_eq!(pos.scoreless_turns(), 1);
        pos.play_move(&single(Square::new(7, 7), 17, 20, &[5]));
        assert_eq!(pos.scoreless_turns(), 0);
    }

    #[test]
    fn test_bag_remaining() {
        let pos = Position::new(
            Board::new(),
            racks(&[1], &[2]),
            [0, 0],
            0,
            LetterValues::english(),
        )
        .with_bag(vec![Tile::letter(3)]);
        assert_eq!(pos.bag_remaining(), 1);
    }
}
