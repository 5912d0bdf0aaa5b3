//! Search module for the endgame solver
//!
//! Contains:
//! - Zobrist hashing for position keys
//! - Killer-move cache for move ordering
//! - Arena of search nodes for principal-variation reconstruction
//! - Alpha-beta search with iterative deepening
//! - Cooperative cancellation

pub mod alphabeta;
pub mod control;
pub mod killer;
pub mod node;
pub mod zobrist;

pub use alphabeta::{SearchStats, Solution, Solver, MAX_PLIES};
pub use control::CancelToken;
pub use killer::{KillerCache, KillerProbe};
pub use node::{NodeArena, NodeId, NodeValue, SearchNode};
pub use zobrist::ZobristTable;
