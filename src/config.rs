//! Solver configuration
//!
//! Every field has a default, so a partial document deserializes cleanly:
//!
//! ```
//! use endgame::SolverConfig;
//!
//! let cfg: SolverConfig = serde_json::from_str(r#"{ "complex_evaluation": true }"#).unwrap();
//! assert!(cfg.complex_evaluation);
//! assert!(cfg.iterative_deepening);
//! assert_eq!(cfg.opp_reply_limit, 50);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{SolverError, SolverResult};

/// Opponent replies considered by the two-ply evaluator.
pub const TWO_PLY_OPP_SEARCH_LIMIT: usize = 50;

/// Scoreless-turn limit used while solving, so repeated passes end the game quickly.
pub const ENDGAME_MAX_SCORELESS_TURNS: u32 = 2;

/// Tunable behaviour of the [`Solver`](crate::search::Solver).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Search depths 1..=plies instead of only `plies`
    pub iterative_deepening: bool,
    /// Value candidates with the two-ply reply/stuck-tile evaluator
    pub complex_evaluation: bool,
    /// Alpha-beta cutoffs; disabling searches the full tree
    pub pruning: bool,
    /// Try the previously best move first at each position
    pub killer_moves: bool,
    /// Cap on opponent replies examined per node by the complex evaluator
    pub opp_reply_limit: usize,
    /// Weight of estimated future points against points scored now
    pub future_adjustment: f32,
    /// Scoreless-turn limit imposed on the game while solving
    pub endgame_max_scoreless_turns: u32,
    /// Abort the search after visiting this many nodes
    pub node_limit: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            iterative_deepening: true,
            complex_evaluation: false,
            pruning: true,
            killer_moves: true,
            opp_reply_limit: TWO_PLY_OPP_SEARCH_LIMIT,
            future_adjustment: 1.0,
            endgame_max_scoreless_turns: ENDGAME_MAX_SCORELESS_TURNS,
            node_limit: None,
        }
    }
}

impl SolverConfig {
    /// Check ranges before the solver accepts the configuration.
    pub fn validate(&self) -> SolverResult<()> {
        if self.opp_reply_limit == 0 {
            return Err(SolverError::InvalidConfig {
                message: "opp_reply_limit must be positive".to_string(),
            });
        }
        if !self.future_adjustment.is_finite() {
            return Err(SolverError::InvalidConfig {
                message: format!(
                    "future_adjustment must be finite, got {}",
                    self.future_adjustment
                ),
            });
        }
        if self.endgame_max_scoreless_turns == 0 {
            return Err(SolverError::InvalidConfig {
                message: "endgame_max_scoreless_turns must be positive".to_string(),
            });
        }
        Ok(())
    }
}
