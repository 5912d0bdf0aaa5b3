//! Collaborator interfaces consumed by the solver
//!
//! The solver never owns game rules or a dictionary. It drives:
//! - a [`GameState`]: board, racks, scores, turn, and a stack-ordered
//!   play/undo mechanism
//! - a [`MoveGenerator`]: scored candidate moves for a rack on a board
//!
//! [`Position`] and [`CatalogGenerator`] are complete implementations of
//! those traits: exact endgame rules, and a generator over a fixed list of
//! moves (no dictionary).

pub mod catalog;
pub mod position;

pub use catalog::CatalogGenerator;
pub use position::{Position, DEFAULT_MAX_SCORELESS_TURNS};

use crate::board::Board;
use crate::moves::Move;
use crate::tiles::{LetterValues, Rack};

/// Ordering applied by a generator to its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Generation order
    #[default]
    None,
    /// Highest score first (stable)
    ByScore,
}

/// Source of scored candidate moves.
pub trait MoveGenerator {
    /// All candidate moves for `rack` on `board`, ordered per the current sort mode.
    fn generate_all(&mut self, board: &Board, rack: &Rack, exchanges_allowed: bool) -> Vec<Move>;

    fn set_sort_mode(&mut self, mode: SortMode);

    fn sort_mode(&self) -> SortMode;
}

/// Mutable two-player game state.
///
/// `play_move` pushes an undo record and `unplay_last_move` pops it; undo
/// always reverses the most recent play.
pub trait GameState {
    fn board(&self) -> &Board;

    fn rack_for(&self, player: usize) -> &Rack;

    fn player_on_turn(&self) -> usize;

    fn num_players(&self) -> usize;

    /// Number of moves played so far.
    fn turn(&self) -> usize;

    /// Score of `player` minus the opponent's score.
    fn spread_for(&self, player: usize) -> i32;

    /// True once the game has ended.
    fn is_over(&self) -> bool;

    /// Tiles still undrawn.
    fn bag_remaining(&self) -> usize;

    fn letter_values(&self) -> &LetterValues;

    fn scoreless_turns(&self) -> u32;

    fn max_scoreless_turns(&self) -> u32;

    fn set_max_scoreless_turns(&mut self, turns: u32);

    /// Play `mv` for the player on turn. No legality checks.
    fn play_move(&mut self, mv: &Move);

    /// Undo the most recent `play_move`.
    fn unplay_last_move(&mut self);
}
