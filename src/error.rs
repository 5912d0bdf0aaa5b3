//! Error types for the endgame solver
//!
//! Any error raised inside the recursive search aborts the depth being
//! searched and is surfaced to [`Solver::solve`](crate::search::Solver::solve),
//! which never retries. Falling back to a cheaper move choice is the
//! caller's job (see [`EndgameEngine`](crate::engine::EndgameEngine)).

use thiserror::Error;

/// Errors that can occur while setting up or running the solver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Tiles remain undrawn, so racks are not fully known
    #[error("bag still holds {remaining} tiles; endgame position is not fully determined")]
    PositionNotDetermined { remaining: usize },

    /// Deadline, cancel request, or node budget hit during the search
    #[error("search cancelled")]
    Cancelled,

    /// No depth completed before the search was cancelled
    #[error("no endgame solution found")]
    NoSolution,

    /// A ply budget of zero was requested
    #[error("ply budget must be at least 1")]
    InvalidPlyBudget,

    /// Only two-player games can be solved
    #[error("solver requires exactly two players, found {found}")]
    UnsupportedPlayerCount { found: usize },

    /// Configuration value out of range
    #[error("invalid solver configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for solver operations
pub type SolverResult<T> = Result<T, SolverError>;
