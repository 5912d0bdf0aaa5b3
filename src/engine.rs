//! Endgame engine wrapping the solver with a time budget
//!
//! The engine asks the [`Solver`] for the best line within a time limit.
//! If the search produces nothing usable (cancelled before the first depth
//! completed), it falls back to the best candidate of a one-ply static
//! valuation, so a move is always available.
//!
//! # Example
//!
//! ```
//! use endgame::board::{Board, Square};
//! use endgame::game::{CatalogGenerator, Position};
//! use endgame::tiles::{LetterValues, Rack, Tile};
//! use endgame::{EndgameEngine, ResultSource};
//!
//! let mut gen = CatalogGenerator::new();
//! gen.add_placement(Square::new(7, 7), false, &[Some(Tile::letter(1))], 2);
//!
//! let racks = [
//!     Rack::from_tiles(&[Tile::letter(1)]),
//!     Rack::from_tiles(&[Tile::letter(26)]),
//! ];
//! let pos = Position::new(Board::new(), racks, [0, 0], 0, LetterValues::english());
//!
//! let mut engine = EndgameEngine::new(gen.clone(), gen, pos).unwrap();
//! let result = engine.get_move_with_stats().unwrap();
//! assert_eq!(result.source, ResultSource::Solved);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::SolverConfig;
use crate::error::{SolverError, SolverResult};
use crate::game::{GameState, MoveGenerator};
use crate::moves::Move;
use crate::search::{CancelToken, Solution, Solver};

/// Default ply budget.
pub const DEFAULT_MAX_PLIES: usize = 8;

/// Default time limit per solve, in milliseconds.
pub const DEFAULT_TIME_LIMIT_MS: u64 = 5_000;

/// Which path produced an [`EngineResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    /// Alpha-beta search completed at least one depth
    Solved,
    /// Static one-ply valuation after the search gave up
    Fallback,
}

/// Result of a move search with search statistics.
#[derive(Debug, Clone)]
pub struct EngineResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Spread change estimate for the player on turn
    pub value: f32,
    /// Principal variation (just the best move for a fallback)
    pub sequence: Vec<Move>,
    pub source: ResultSource,
    /// Deepest completed depth; 0 for a fallback
    pub depth: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl EngineResult {
    #[inline]
    fn solved(solution: Solution, time_ms: u64) -> Self {
        Self {
            best_move: solution.best_move().cloned(),
            value: solution.value,
            depth: solution.depth,
            nodes: solution.stats.nodes,
            sequence: solution.sequence,
            source: ResultSource::Solved,
            time_ms,
        }
    }

    #[inline]
    fn fallback(best: Option<Move>, time_ms: u64, nodes: u64) -> Self {
        Self {
            value: best.as_ref().map_or(0.0, Move::valuation),
            sequence: best.iter().cloned().collect(),
            best_move: best,
            source: ResultSource::Fallback,
            depth: 0,
            time_ms,
            nodes,
        }
    }
}

/// Endgame engine: solver plus search limits.
pub struct EndgameEngine<G, M> {
    solver: Solver<G, M>,
    max_plies: usize,
    time_limit: Duration,
}

impl<G, M> EndgameEngine<G, M>
where
    G: GameState + Send,
    M: MoveGenerator + Send,
{
    /// Engine with the default configuration, ply budget, and time limit.
    pub fn new(stm_gen: M, ots_gen: M, game: G) -> SolverResult<Self> {
        Self::with_config(
            stm_gen,
            ots_gen,
            game,
            SolverConfig::default(),
            DEFAULT_MAX_PLIES,
            DEFAULT_TIME_LIMIT_MS,
        )
    }

    /// Engine with explicit solver configuration and search limits.
    pub fn with_config(
        stm_gen: M,
        ots_gen: M,
        game: G,
        config: SolverConfig,
        max_plies: usize,
        time_limit_ms: u64,
    ) -> SolverResult<Self> {
        Ok(Self {
            solver: Solver::new(stm_gen, ots_gen, game, config)?,
            max_plies,
            time_limit: Duration::from_millis(time_limit_ms),
        })
    }

    #[inline]
    pub fn solver(&self) -> &Solver<G, M> {
        &self.solver
    }

    #[inline]
    pub fn solver_mut(&mut self) -> &mut Solver<G, M> {
        &mut self.solver
    }

    #[inline]
    pub fn max_plies(&self) -> usize {
        self.max_plies
    }

    /// Best move for the player on turn.
    pub fn get_move(&mut self) -> SolverResult<Option<Move>> {
        Ok(self.get_move_with_stats()?.best_move)
    }

    /// Best move with search statistics.
    ///
    /// Cancellation and an empty search fall back to the static ranking;
    /// every other error is returned unchanged.
    pub fn get_move_with_stats(&mut self) -> SolverResult<EngineResult> {
        let start = Instant::now();
        let cancel = CancelToken::with_timeout(self.time_limit);

        match self.solver.solve(&cancel, self.max_plies) {
            Ok(solution) => Ok(EngineResult::solved(
                solution,
                start.elapsed().as_millis() as u64,
            )),
            Err(err @ (SolverError::NoSolution | SolverError::Cancelled)) => {
                warn!(error = %err, "search gave no line; using static valuation");
                let nodes = self.solver.stats().nodes;
                let best = self.solver.static_candidates().into_iter().next();
                let result =
                    EngineResult::fallback(best, start.elapsed().as_millis() as u64, nodes);
                info!(
                    best = ?result.best_move.as_ref().map(ToString::to_string),
                    value = result.value,
                    "fallback move chosen"
                );
                Ok(result)
            }
            Err(err) => Err(err),
        }
    }
}
