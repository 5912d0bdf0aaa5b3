//! Multiset rack of tiles

use super::{LetterValues, Tile, MAX_ALPHABET_SIZE};

/// A player's rack, stored as a count per intrinsic machine letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rack {
    counts: [u8; MAX_ALPHABET_SIZE],
    len: u8,
}

impl Rack {
    pub fn new() -> Self {
        Self {
            counts: [0; MAX_ALPHABET_SIZE],
            len: 0,
        }
    }

    /// Build a rack holding exactly `tiles`. Designated blanks go back as blanks.
    #[must_use]
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut rack = Self::new();
        for &t in tiles {
            rack.add(t);
        }
        rack
    }

    #[inline]
    pub fn add(&mut self, tile: Tile) {
        self.counts[tile.intrinsic()] += 1;
        self.len += 1;
    }

    /// Remove one tile. Returns false if the rack does not hold it.
    #[inline]
    pub fn take(&mut self, tile: Tile) -> bool {
        let idx = tile.intrinsic();
        if self.counts[idx] == 0 {
            return false;
        }
        self.counts[idx] -= 1;
        self.len -= 1;
        true
    }

    #[inline]
    pub fn has(&self, tile: Tile) -> bool {
        self.counts[tile.intrinsic()] > 0
    }

    /// Count of an intrinsic letter (0 = blank).
    #[inline]
    pub fn count_of(&self, intrinsic: usize) -> u8 {
        self.counts[intrinsic]
    }

    #[inline]
    pub fn num_tiles(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Tiles on the rack in machine-letter order, blanks first.
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> {
        let mut out = Vec::with_capacity(self.num_tiles());
        for (idx, &count) in self.counts.iter().enumerate() {
            let tile = if idx == 0 {
                Tile::BLANK
            } else {
                Tile::letter(idx as u8)
            };
            for _ in 0..count {
                out.push(tile);
            }
        }
        out
    }

    /// Whether every tile of `tiles` can be drawn from this rack at once.
    #[must_use]
    pub fn contains_all(&self, tiles: &[Tile]) -> bool {
        let mut needed = [0u8; MAX_ALPHABET_SIZE];
        for t in tiles {
            let idx = t.intrinsic();
            needed[idx] += 1;
            if needed[idx] > self.counts[idx] {
                return false;
            }
        }
        true
    }

    /// Tiles left after removing `tiles`, or `None` if the rack lacks any of them.
    #[must_use]
    pub fn leave_after(&self, tiles: &[Tile]) -> Option<Vec<Tile>> {
        let mut rest = self.clone();
        for &t in tiles {
            if !rest.take(t) {
                return None;
            }
        }
        Some(rest.tiles())
    }

    /// Total point value of the tiles on this rack.
    #[must_use]
    pub fn score_on(&self, values: &LetterValues) -> i32 {
        self.counts
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, &c)| values.score(Tile::letter(idx as u8)) * i32::from(c))
            .sum()
    }
}

impl Default for Rack {
    fn default() -> Self {
        Self::new()
    }
}
