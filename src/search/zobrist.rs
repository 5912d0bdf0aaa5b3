//! Zobrist hashing for endgame positions
//!
//! A key covers the board contents, both racks (as per-letter counts), and
//! which side is to move. Playing a move updates the key in O(tiles played),
//! and the incremental key always equals a from-scratch hash of the
//! resulting position, whatever order the moves were played in.
//!
//! # Example
//!
//! ```
//! use endgame::board::{Board, Square};
//! use endgame::moves::Move;
//! use endgame::search::ZobristTable;
//! use endgame::tiles::{Rack, Tile};
//!
//! let zt = ZobristTable::new(15);
//! let mut board = Board::new();
//! let mut mine = Rack::from_tiles(&[Tile::letter(1), Tile::letter(2)]);
//! let theirs = Rack::from_tiles(&[Tile::letter(3)]);
//!
//! let hash1 = zt.hash(&board, &mine, &theirs, false);
//!
//! let mv = Move::placement(Square::new(7, 7), false, &[Some(Tile::letter(1))], 2, vec![Tile::letter(2)]);
//! board.place_tile(Square::new(7, 7), Tile::letter(1));
//! mine.take(Tile::letter(1));
//!
//! // Incremental update is equivalent to full recomputation
//! assert_eq!(zt.add_move(hash1, &mv, true), zt.hash(&board, &mine, &theirs, true));
//! ```

use crate::board::{Board, BOARD_DIM, MAX_BOARD_DIM};
use crate::moves::{Move, MoveKind};
use crate::tiles::{Rack, Tile, MAX_ALPHABET_SIZE, RACK_SIZE};

/// Letter slots per square: natural letters, then designated blanks.
const SQUARE_SLOTS: usize = MAX_ALPHABET_SIZE * 2;

/// Fixed seed so tables (and therefore keys) are identical across runs.
const SEED: u64 = 0x1234_5678_9ABC_DEF0;

/// Zobrist table for position hashing.
///
/// Random values are precomputed for every (square, letter) pair, every
/// (side, letter, rack count) triple, and for "minimizer to move".
pub struct ZobristTable {
    dim: usize,
    squares: Vec<[u64; SQUARE_SLOTS]>,
    /// [side][letter][count], side 0 = maximizer
    racks: [[[u64; RACK_SIZE + 1]; MAX_ALPHABET_SIZE]; 2],
    minimizer_to_move: u64,
}

impl ZobristTable {
    /// Table for a board of dimension `dim`.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        let mut zt = Self {
            dim: 0,
            squares: Vec::new(),
            racks: [[[0; RACK_SIZE + 1]; MAX_ALPHABET_SIZE]; 2],
            minimizer_to_move: 0,
        };
        zt.initialize(dim);
        zt
    }

    /// Reseed for a board of dimension `dim`.
    ///
    /// Uses a linear congruential generator with a fixed seed, so the same
    /// dimension always yields the same table.
    pub fn initialize(&mut self, dim: usize) {
        // Constants from Knuth's MMIX LCG
        let mut seed = SEED;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            seed
        };

        let dim = dim.clamp(1, MAX_BOARD_DIM);
        self.dim = dim;
        self.squares.clear();
        self.squares.reserve(dim * dim);
        for _ in 0..dim * dim {
            let mut slots = [0u64; SQUARE_SLOTS];
            for slot in slots.iter_mut() {
                *slot = next_rand();
            }
            self.squares.push(slots);
        }

        for side in 0..2 {
            for letter in 0..MAX_ALPHABET_SIZE {
                for count in 0..=RACK_SIZE {
                    self.racks[side][letter][count] = next_rand();
                }
            }
        }

        self.minimizer_to_move = next_rand();
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    fn square_slot(tile: Tile) -> usize {
        if tile.is_blank() {
            MAX_ALPHABET_SIZE + tile.unblanked()
        } else {
            tile.unblanked()
        }
    }

    /// Rack contribution of holding `count` copies of `letter`; zero when none held.
    #[inline]
    fn rack_component(&self, side: usize, letter: usize, count: usize) -> u64 {
        if count == 0 {
            0
        } else {
            self.racks[side][letter][count.min(RACK_SIZE)]
        }
    }

    /// Compute the full hash for a position.
    ///
    /// `max_rack` belongs to the player the search maximizes for. During
    /// search use [`add_move`](Self::add_move) instead.
    #[must_use]
    pub fn hash(
        &self,
        board: &Board,
        max_rack: &Rack,
        min_rack: &Rack,
        minimizer_to_move: bool,
    ) -> u64 {
        debug_assert_eq!(board.dim(), self.dim, "hasher initialized for another board size");
        let mut h = 0u64;

        for (sq, tile) in board.iter_tiles() {
            h ^= self.squares[sq.to_index(self.dim)][Self::square_slot(tile)];
        }

        for (side, rack) in [max_rack, min_rack].into_iter().enumerate() {
            for letter in 0..MAX_ALPHABET_SIZE {
                h ^= self.rack_component(side, letter, rack.count_of(letter) as usize);
            }
        }

        if minimizer_to_move {
            h ^= self.minimizer_to_move;
        }

        h
    }

    /// Incrementally update a key for `mv` played by the maximizer
    /// (`maximizer_moved`) or the minimizer.
    ///
    /// Placed squares are XORed in, the mover's per-letter rack counts move
    /// from their pre-move to post-move values (recovered from the move's
    /// tiles and leave), and the side to move toggles. Passes and exchanges
    /// only toggle the side; with an empty bag an exchange cannot change a rack.
    #[must_use]
    pub fn add_move(&self, hash: u64, mv: &Move, maximizer_moved: bool) -> u64 {
        let mut h = hash ^ self.minimizer_to_move;
        if mv.kind() != MoveKind::Place {
            return h;
        }

        let side = if maximizer_moved { 0 } else { 1 };
        let mut played = [0u8; MAX_ALPHABET_SIZE];
        for p in mv.placed() {
            h ^= self.squares[p.square.to_index(self.dim)][Self::square_slot(p.tile)];
            played[p.tile.intrinsic()] += 1;
        }

        let mut left = [0u8; MAX_ALPHABET_SIZE];
        for t in mv.leave() {
            left[t.intrinsic()] += 1;
        }

        for letter in 0..MAX_ALPHABET_SIZE {
            if played[letter] == 0 {
                continue;
            }
            let after = left[letter] as usize;
            let before = after + played[letter] as usize;
            h ^= self.rack_component(side, letter, before)
                ^ self.rack_component(side, letter, after);
        }

        h
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new(BOARD_DIM)
    }
}
