//! Move generator over a fixed catalog of placements
//!
//! Offers every catalog entry whose new tiles are on the rack, whose target
//! squares are empty, and whose played-through squares are occupied. Leaves
//! are computed from the rack. No dictionary is consulted.
//!
//! # Example
//!
//! ```
//! use endgame::board::{Board, Square};
//! use endgame::game::{CatalogGenerator, MoveGenerator};
//! use endgame::tiles::{Rack, Tile};
//!
//! let mut gen = CatalogGenerator::new();
//! gen.add_placement(Square::new(7, 7), false, &[Some(Tile::letter(1))], 2);
//! gen.add_placement(Square::new(7, 7), false, &[Some(Tile::letter(26))], 10);
//!
//! let rack = Rack::from_tiles(&[Tile::letter(1), Tile::letter(5)]);
//! let moves = gen.generate_all(&Board::new(), &rack, false);
//! assert_eq!(moves.len(), 1);
//! assert_eq!(moves[0].leave(), &[Tile::letter(5)]);
//! ```

use super::{MoveGenerator, SortMode};
use crate::board::{Board, Square};
use crate::moves::Move;
use crate::tiles::{Rack, Tile};

#[derive(Debug, Clone)]
struct CatalogEntry {
    start: Square,
    vertical: bool,
    word: Vec<Option<Tile>>,
    score: i32,
}

impl CatalogEntry {
    /// Tiles drawn from the rack (designated blanks come from rack blanks).
    fn rack_tiles(&self) -> Vec<Tile> {
        self.word.iter().flatten().copied().collect()
    }

    fn fits(&self, board: &Board) -> bool {
        self.word.iter().enumerate().all(|(i, t)| {
            let (mut row, mut col) = (i32::from(self.start.row), i32::from(self.start.col));
            if self.vertical {
                row += i as i32;
            } else {
                col += i as i32;
            }
            if !Square::is_valid(row, col, board.dim()) {
                return false;
            }
            let sq = Square::new(row as u8, col as u8);
            match t {
                Some(_) => board.is_empty(sq),
                None => !board.is_empty(sq),
            }
        })
    }
}

/// Generator backed by a fixed list of placements.
#[derive(Debug, Clone, Default)]
pub struct CatalogGenerator {
    catalog: Vec<CatalogEntry>,
    sort_mode: SortMode,
}

impl CatalogGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a placement; `None` in `word` marks a played-through square.
    pub fn add_placement(
        &mut self,
        start: Square,
        vertical: bool,
        word: &[Option<Tile>],
        score: i32,
    ) -> &mut Self {
        self.catalog.push(CatalogEntry {
            start,
            vertical,
            word: word.to_vec(),
            score,
        });
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

impl MoveGenerator for CatalogGenerator {
    fn generate_all(&mut self, board: &Board, rack: &Rack, _exchanges_allowed: bool) -> Vec<Move> {
        let mut moves: Vec<Move> = self
            .catalog
            .iter()
            .filter(|e| e.fits(board))
            .filter_map(|e| {
                let leave = rack.leave_after(&e.rack_tiles())?;
                Some(Move::placement(e.start, e.vertical, &e.word, e.score, leave))
            })
            .collect();

        if self.sort_mode == SortMode::ByScore {
            moves.sort_by(|a, b| b.score().cmp(&a.score()));
        }
        moves
    }

    fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }
}
