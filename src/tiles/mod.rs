//! Tile representation for the crossword game
//!
//! Tiles are machine letters stored in a `u8`:
//! - `0` is an undesignated blank sitting on a rack
//! - `1..MAX_ALPHABET_SIZE` are natural letters
//! - `0x80 | letter` is a blank that was placed on the board as `letter`

pub mod rack;


pub use rack::Rack;

/// Number of distinct machine letters, including the blank at index 0.
pub const MAX_ALPHABET_SIZE: usize = 50;

/// Maximum number of tiles a rack can hold.
pub const RACK_SIZE: usize = 7;

/// A single machine letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u8);

impl Tile {
    /// Undesignated blank (rack form).
    pub const BLANK: Tile = Tile(0);

    const BLANK_BIT: u8 = 0x80;

    /// Natural letter. `letter` must be in `1..MAX_ALPHABET_SIZE`.
    #[inline]
    pub fn letter(letter: u8) -> Self {
        debug_assert!(letter > 0 && (letter as usize) < MAX_ALPHABET_SIZE);
        Tile(letter)
    }

    /// Blank placed on the board standing for `letter`.
    #[inline]
    pub fn designated_blank(letter: u8) -> Self {
        debug_assert!(letter > 0 && (letter as usize) < MAX_ALPHABET_SIZE);
        Tile(letter | Self::BLANK_BIT)
    }

    /// Raw machine-letter code.
    #[inline]
    pub fn code(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_blank(self) -> bool {
        self.0 == 0 || self.0 & Self::BLANK_BIT != 0
    }

    /// Index of the rack tile this tile came from: `0` for any blank,
    /// the letter itself otherwise.
    #[inline]
    pub fn intrinsic(self) -> usize {
        if self.is_blank() {
            0
        } else {
            self.0 as usize
        }
    }

    /// Letter this tile reads as on the board (blank designation included).
    /// Returns 0 for an undesignated blank.
    #[inline]
    pub fn unblanked(self) -> usize {
        (self.0 & !Self::BLANK_BIT) as usize
    }
}

/// Point values for every machine letter. Blanks are always worth zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterValues {
    values: [i32; MAX_ALPHABET_SIZE],
}

impl LetterValues {
    /// Build from a slice indexed by machine letter (index 0 = blank).
    ///
    /// Entries past `MAX_ALPHABET_SIZE` are ignored; the blank's entry is forced to 0.
    #[must_use]
    pub fn from_slice(values: &[i32]) -> Self {
        let mut table = [0i32; MAX_ALPHABET_SIZE];
        for (slot, &v) in table.iter_mut().zip(values).skip(1) {
            *slot = v;
        }
        Self { values: table }
    }

    /// Standard English tile values, letters A..Z mapped to 1..=26.
    #[must_use]
    pub fn english() -> Self {
        const SCORES: [i32; 27] = [
            0, // ?
            1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, // A-M
            1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10, // N-Z
        ];
        Self::from_slice(&SCORES)
    }

    /// Value of a single tile. Placed blanks score 0.
    #[inline]
    pub fn score(&self, tile: Tile) -> i32 {
        self.values[tile.intrinsic()]
    }

    /// Sum of the values of a group of tiles.
    #[inline]
    pub fn word_score(&self, tiles: &[Tile]) -> i32 {
        tiles.iter().map(|&t| self.score(t)).sum()
    }
}

impl Default for LetterValues {
    fn default() -> Self {
        Self::english()
    }
}
