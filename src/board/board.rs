//! Board structure holding placed tiles

use super::{Square, BOARD_DIM, MAX_BOARD_DIM};
use crate::tiles::Tile;

/// Game board: one optional tile per square, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dim: usize,
    squares: Vec<Option<Tile>>,
    tile_count: u32,
}

impl Board {
    /// Empty standard-size board.
    pub fn new() -> Self {
        Self::with_dim(BOARD_DIM)
    }

    /// Empty board of the given dimension (clamped to `1..=MAX_BOARD_DIM`).
    #[must_use]
    pub fn with_dim(dim: usize) -> Self {
        let dim = dim.clamp(1, MAX_BOARD_DIM);
        Self {
            dim,
            squares: vec![None; dim * dim],
            tile_count: 0,
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Tile at a square
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Tile> {
        self.squares[sq.to_index(self.dim)]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        (sq.row as usize) < self.dim && (sq.col as usize) < self.dim
    }

    /// Place a tile (no legality checks)
    #[inline]
    pub fn place_tile(&mut self, sq: Square, tile: Tile) {
        let slot = &mut self.squares[sq.to_index(self.dim)];
        if slot.is_none() {
            self.tile_count += 1;
        }
        *slot = Some(tile);
    }

    /// Remove a tile
    #[inline]
    pub fn remove_tile(&mut self, sq: Square) {
        let slot = &mut self.squares[sq.to_index(self.dim)];
        if slot.take().is_some() {
            self.tile_count -= 1;
        }
    }

    /// Occupied squares with their tiles, row-major.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (Square, Tile)> + '_ {
        let dim = self.dim;
        self.squares
            .iter()
            .enumerate()
            .filter_map(move |(idx, t)| t.map(|tile| (Square::from_index(idx, dim), tile)))
    }

    /// Total tiles on board
    #[inline]
    pub fn tile_count(&self) -> u32 {
        self.tile_count
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.tile_count == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
