//! Endgame solver for two-player crossword board games
//!
//! Once the bag is empty both racks are known and the game is one of perfect
//! information. This crate searches it exactly with minimax:
//! - Iterative deepening alpha-beta over a mutable game state
//! - Zobrist position keys and a killer-move cache for move ordering
//! - Heuristic candidate valuation with stuck-tile leave adjustment
//! - Cooperative cancellation with fallback to the last completed depth
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`tiles`]: tiles, racks, letter values
//! - [`board`]: board squares and tile placement
//! - [`moves`]: scored candidate moves and blocking
//! - [`game`]: collaborator traits plus a reference position and generator
//! - [`eval`]: candidate valuation and horizon values
//! - [`search`]: hashing, killer cache, node arena, alpha-beta solver
//! - [`engine`]: solver with time limit and static fallback
//!
//! # Quick Start
//!
//! ```
//! use endgame::board::{Board, Square};
//! use endgame::game::{CatalogGenerator, Position};
//! use endgame::tiles::{LetterValues, Rack, Tile};
//! use endgame::{CancelToken, Solver, SolverConfig};
//!
//! // The generator only knows one word: AB at 8H.
//! let mut gen = CatalogGenerator::new();
//! gen.add_placement(Square::new(7, 7), false, &[Some(Tile::letter(1)), Some(Tile::letter(2))], 8);
//!
//! let racks = [
//!     Rack::from_tiles(&[Tile::letter(1), Tile::letter(2)]),
//!     Rack::from_tiles(&[Tile::letter(5)]),
//! ];
//! let pos = Position::new(Board::new(), racks, [100, 95], 0, LetterValues::english());
//!
//! let mut solver = Solver::new(gen.clone(), gen, pos, SolverConfig::default()).unwrap();
//! let solution = solver.solve(&CancelToken::new(), 4).unwrap();
//! println!("{} -> {:+}", solution.sequence[0], solution.value);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod moves;
pub mod search;
pub mod tiles;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export commonly used types for convenience
pub use board::{Board, Square};
pub use config::SolverConfig;
pub use engine::{EndgameEngine, EngineResult, ResultSource};
pub use error::{SolverError, SolverResult};
pub use game::{CatalogGenerator, GameState, MoveGenerator, Position, SortMode};
pub use moves::{Move, MoveKind};
pub use search::{CancelToken, SearchStats, Solution, Solver};
pub use tiles::{LetterValues, Rack, Tile};
