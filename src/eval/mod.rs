//! Evaluation of candidate moves and horizon positions
//!
//! - [`stuck`]: tiles a player cannot play, and the leave adjustment
//!   built on them
//! - [`heuristic`]: simple and two-ply candidate valuations, and the static
//!   value of a node where the search stops

pub mod heuristic;
pub mod stuck;

pub use heuristic::{
    going_out_value, horizon_value, plays_out, sort_by_valuation, value_complex, value_simple,
};
pub use stuck::{compute_stuck, leave_adjustment};
