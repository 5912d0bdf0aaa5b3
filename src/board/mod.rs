//! Board representation for the crossword game

pub mod board;


// Re-exports
pub use board::Board;

/// Standard board dimension (15x15)
pub const BOARD_DIM: usize = 15;

/// Largest board dimension the hasher and board accept
pub const MAX_BOARD_DIM: usize = 25;

/// Square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_DIM && (col as usize) < MAX_BOARD_DIM);
        Self { row, col }
    }

    /// Row-major index for a board of dimension `dim`.
    #[inline]
    pub fn to_index(self, dim: usize) -> usize {
        self.row as usize * dim + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, dim: usize) -> Self {
        Self {
            row: (idx / dim) as u8,
            col: (idx % dim) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, dim: usize) -> bool {
        row >= 0 && row < dim as i32 && col >= 0 && col < dim as i32
    }

    /// Square `steps` further along a line (`vertical` = down a column).
    #[inline]
    pub fn offset(self, vertical: bool, steps: u8) -> Self {
        if vertical {
            Self::new(self.row + steps, self.col)
        } else {
            Self::new(self.row, self.col + steps)
        }
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
