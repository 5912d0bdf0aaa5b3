//! Small endgame positions shared by the unit tests

use crate::board::{Board, Square};
use crate::config::SolverConfig;
use crate::game::{CatalogGenerator, Position};
use crate::moves::Move;
use crate::search::Solver;
use crate::tiles::{LetterValues, Rack, Tile};

pub(crate) fn letter(l: u8) -> Tile {
    Tile::letter(l)
}

pub(crate) fn word(letters: &[u8]) -> Vec<Option<Tile>> {
    letters
        .iter()
        .map(|&l| if l == 0 { None } else { Some(letter(l)) })
        .collect()
}

fn rack(letters: &[u8]) -> Rack {
    Rack::from_tiles(&letters.iter().map(|&l| letter(l)).collect::<Vec<_>>())
}

/// Every letter worth one point.
pub(crate) fn flat_values() -> LetterValues {
    LetterValues::from_slice(&[1; 27])
}

pub(crate) fn position(first: &[u8], second: &[u8], values: LetterValues) -> Position {
    Position::new(Board::new(), [rack(first), rack(second)], [0, 0], 0, values)
}

pub(crate) fn solver(
    gen: CatalogGenerator,
    pos: Position,
    config: SolverConfig,
) -> Solver<Position, CatalogGenerator> {
    Solver::new(gen.clone(), gen, pos, config).unwrap()
}

/// First player's only placement in [`forced_two_ply`].
pub(crate) fn forced_first() -> Move {
    Move::placement(Square::new(7, 7), false, &word(&[1]), 10, vec![Tile::BLANK])
}

/// Second player's only placement in [`forced_two_ply`].
pub(crate) fn forced_reply() -> Move {
    Move::placement(Square::new(0, 0), false, &word(&[3]), 4, vec![])
}

/// First player holds A and a blank and can only play A for 10; second
/// player holds C and can only go out for 4. The blank left behind is worth
/// nothing, so the best line A-then-C swings exactly 10 - 4.
pub(crate) fn forced_two_ply() -> (CatalogGenerator, Position) {
    let mut gen = CatalogGenerator::new();
    gen.add_placement(Square::new(7, 7), false, &word(&[1]), 10)
        .add_placement(Square::new(0, 0), false, &word(&[3]), 4);
    let racks = [Rack::from_tiles(&[letter(1), Tile::BLANK]), rack(&[3])];
    (gen, Position::new(Board::new(), racks, [0, 0], 0, flat_values()))
}

/// A B C against D E with overlapping placements, an out play for the
/// first player and a play-through word for the second.
pub(crate) fn contested() -> (CatalogGenerator, Position) {
    let mut gen = CatalogGenerator::new();
    gen.add_placement(Square::new(7, 7), false, &word(&[1]), 3)
        .add_placement(Square::new(7, 7), false, &word(&[1, 2]), 7)
        .add_placement(Square::new(7, 7), false, &word(&[1, 2, 3]), 15)
        .add_placement(Square::new(3, 3), true, &word(&[3]), 5)
        .add_placement(Square::new(3, 3), true, &word(&[2, 3]), 6)
        .add_placement(Square::new(0, 0), false, &word(&[1]), 2)
        .add_placement(Square::new(12, 12), false, &word(&[2]), 3)
        .add_placement(Square::new(7, 7), true, &word(&[4, 5]), 12)
        .add_placement(Square::new(10, 2), false, &word(&[4]), 6)
        .add_placement(Square::new(10, 2), false, &word(&[5]), 4)
        .add_placement(Square::new(3, 3), false, &word(&[5, 4]), 9)
        .add_placement(Square::new(12, 12), false, &word(&[4]), 5)
        .add_placement(Square::new(7, 6), false, &word(&[4, 0]), 8);
    (gen, position(&[1, 2, 3], &[4, 5], LetterValues::english()))
}

/// First player holds a single A with one placement for it.
pub(crate) fn single_tile() -> (CatalogGenerator, Position) {
    let mut gen = CatalogGenerator::new();
    gen.add_placement(Square::new(7, 7), false, &word(&[1]), 2);
    (gen, position(&[1], &[2, 3], flat_values()))
}

/// First player holds Q Z and nothing in the catalog uses them.
pub(crate) fn stuck_player() -> (CatalogGenerator, Position) {
    let mut gen = CatalogGenerator::new();
    gen.add_placement(Square::new(7, 7), false, &word(&[1]), 2);
    (gen, position(&[17, 26], &[1], LetterValues::english()))
}
