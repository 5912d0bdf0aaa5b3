//! Candidate moves produced by a move generator
//!
//! A [`Move`] is a plain value: kind, the tiles it puts down (or exchanges),
//! the tiles left on the rack afterwards, its score, and a mutable valuation
//! the search fills in at every node visit.
//!
//! # Example
//!
//! ```
//! use endgame::board::Square;
//! use endgame::moves::Move;
//! use endgame::tiles::Tile;
//!
//! // Two tiles placed around an existing tile at 8H.
//! let word = [Some(Tile::letter(3)), None, Some(Tile::letter(20))];
//! let mv = Move::placement(Square::new(7, 7), false, &word, 12, vec![Tile::letter(1)]);
//! assert_eq!(mv.tiles_played(), 2);
//! assert_eq!(mv.to_string(), "8H C.T");
//! ```

use std::fmt;

use crate::board::Square;
use crate::tiles::Tile;

/// What a move does with the rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Tiles placed on the board
    Place,
    /// Tiles returned to the bag
    Exchange,
    /// Nothing played
    Pass,
}

/// A tile newly put on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedTile {
    pub square: Square,
    pub tile: Tile,
}

/// Inclusive rectangle of squares; signed so it may hang off the board edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    top: i32,
    left: i32,
    bottom: i32,
    right: i32,
}

impl Rect {
    #[inline]
    fn contains(&self, sq: Square) -> bool {
        let (r, c) = (i32::from(sq.row), i32::from(sq.col));
        r >= self.top && r <= self.bottom && c >= self.left && c <= self.right
    }
}

/// A scored candidate move.
#[derive(Debug, Clone)]
pub struct Move {
    kind: MoveKind,
    /// First square of the main word (placements only)
    start: Square,
    vertical: bool,
    /// Main word length including played-through squares
    word_len: u8,
    placed: Vec<PlacedTile>,
    exchanged: Vec<Tile>,
    leave: Vec<Tile>,
    score: i32,
    valuation: f32,
}

impl Move {
    /// Placement along a line starting at `start`.
    ///
    /// `word` covers the whole main word; `None` marks a square played
    /// through (already occupied before this move).
    #[must_use]
    pub fn placement(
        start: Square,
        vertical: bool,
        word: &[Option<Tile>],
        score: i32,
        leave: Vec<Tile>,
    ) -> Self {
        let placed = word
            .iter()
            .enumerate()
            .filter_map(|(i, t)| {
                t.map(|tile| PlacedTile {
                    square: start.offset(vertical, i as u8),
                    tile,
                })
            })
            .collect();
        Self {
            kind: MoveKind::Place,
            start,
            vertical,
            word_len: word.len() as u8,
            placed,
            exchanged: Vec::new(),
            leave,
            score,
            valuation: score as f32,
        }
    }

    /// Pass, keeping the whole rack as leave.
    #[must_use]
    pub fn pass(leave: Vec<Tile>) -> Self {
        Self {
            kind: MoveKind::Pass,
            start: Square::new(0, 0),
            vertical: false,
            word_len: 0,
            placed: Vec::new(),
            exchanged: Vec::new(),
            leave,
            score: 0,
            valuation: 0.0,
        }
    }

    /// Exchange of `tiles`.
    #[must_use]
    pub fn exchange(tiles: Vec<Tile>, leave: Vec<Tile>) -> Self {
        Self {
            kind: MoveKind::Exchange,
            start: Square::new(0, 0),
            vertical: false,
            word_len: 0,
            placed: Vec::new(),
            exchanged: tiles,
            leave,
            score: 0,
            valuation: 0.0,
        }
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub fn is_pass(&self) -> bool {
        self.kind == MoveKind::Pass
    }

    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[inline]
    pub fn valuation(&self) -> f32 {
        self.valuation
    }

    #[inline]
    pub fn set_valuation(&mut self, v: f32) {
        self.valuation = v;
    }

    /// Number of rack tiles the move uses.
    #[inline]
    pub fn tiles_played(&self) -> usize {
        match self.kind {
            MoveKind::Place => self.placed.len(),
            MoveKind::Exchange => self.exchanged.len(),
            MoveKind::Pass => 0,
        }
    }

    /// Tiles newly put on the board.
    #[inline]
    pub fn placed(&self) -> &[PlacedTile] {
        &self.placed
    }

    /// Tiles leaving the rack, in rack form for exchanges and board form for placements.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.placed
            .iter()
            .map(|p| p.tile)
            .chain(self.exchanged.iter().copied())
    }

    #[inline]
    pub fn leave(&self) -> &[Tile] {
        &self.leave
    }

    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.vertical
    }

    /// Same play, ignoring score and valuation.
    #[must_use]
    pub fn same_play(&self, other: &Move) -> bool {
        if self.kind != other.kind {
            return false;
        }
        match self.kind {
            MoveKind::Place => {
                self.start == other.start
                    && self.vertical == other.vertical
                    && self.word_len == other.word_len
                    && self.placed == other.placed
            }
            MoveKind::Exchange => self.exchanged == other.exchanged,
            MoveKind::Pass => true,
        }
    }

    /// Rectangles a later play must stay out of for this move to remain
    /// playable: the main-word line extended one square past each end, and
    /// the band around the placed tiles widened by one perpendicular square.
    fn blocking_rects(&self) -> Option<[Rect; 2]> {
        if self.kind != MoveKind::Place || self.placed.is_empty() {
            return None;
        }
        let (r, c) = (i32::from(self.start.row), i32::from(self.start.col));
        let len = i32::from(self.word_len);
        let along = |p: &PlacedTile| {
            if self.vertical {
                i32::from(p.square.row)
            } else {
                i32::from(p.square.col)
            }
        };
        let lo = self.placed.iter().map(along).min().unwrap_or(0);
        let hi = self.placed.iter().map(along).max().unwrap_or(0);

        Some(if self.vertical {
            [
                Rect {
                    top: r - 1,
                    left: c,
                    bottom: r + len,
                    right: c,
                },
                Rect {
                    top: lo,
                    left: c - 1,
                    bottom: hi,
                    right: c + 1,
                },
            ]
        } else {
            [
                Rect {
                    top: r,
                    left: c - 1,
                    bottom: r,
                    right: c + len,
                },
                Rect {
                    top: r - 1,
                    left: lo,
                    bottom: r + 1,
                    right: hi,
                },
            ]
        })
    }

    /// Whether playing `self` first would make `reply` unplayable.
    ///
    /// Passes and exchanges neither block nor get blocked.
    #[must_use]
    pub fn blocks(&self, reply: &Move) -> bool {
        if self.kind != MoveKind::Place {
            return false;
        }
        let Some(rects) = reply.blocking_rects() else {
            return false;
        };
        self.placed
            .iter()
            .any(|p| rects.iter().any(|r| r.contains(p.square)))
    }
}

/// Letter for display: A-Z uppercase, blanks lowercase, others as `[n]`.
fn tile_char(tile: Tile, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let letter = tile.unblanked();
    if (1..=26).contains(&letter) {
        let base = if tile.is_blank() { b'a' } else { b'A' };
        write!(f, "{}", (base + letter as u8 - 1) as char)
    } else if letter == 0 {
        write!(f, "?")
    } else {
        write!(f, "[{letter}]")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Pass => write!(f, "(Pass)"),
            MoveKind::Exchange => {
                write!(f, "(Exch ")?;
                for &t in &self.exchanged {
                    tile_char(t, f)?;
                }
                write!(f, ")")
            }
            MoveKind::Place => {
                let row = self.start.row + 1;
                let col = (b'A' + self.start.col) as char;
                if self.vertical {
                    write!(f, "{col}{row} ")?;
                } else {
                    write!(f, "{row}{col} ")?;
                }
                for i in 0..self.word_len {
                    let sq = self.start.offset(self.vertical, i);
                    match self.placed.iter().find(|p| p.square == sq) {
                        Some(p) => tile_char(p.tile, f)?,
                        None => write!(f, ".")?,
                    }
                }
                Ok(())
            }
        }
    }
}
