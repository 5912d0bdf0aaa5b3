//! Alpha-beta endgame search with iterative deepening
//!
//! Two-player minimax over one mutable game state. Every node generates
//! the side-to-move's candidates, values and sorts them, tries the killer
//! move first, and recurses with play/undo. Values are the maximizer's
//! spread change from the root.
//!
//! # Features
//!
//! - Iterative deepening; the last completed depth survives a cancellation
//! - Killer-move cache keyed by incremental Zobrist position keys
//! - Simple or two-ply (stuck tile aware) candidate valuation
//! - Cooperative cancellation through [`CancelToken`] and a node budget
//!
//! # Example
//!
//! ```
//! use endgame::board::{Board, Square};
//! use endgame::game::{CatalogGenerator, Position};
//! use endgame::search::{CancelToken, Solver};
//! use endgame::tiles::{LetterValues, Rack, Tile};
//! use endgame::SolverConfig;
//!
//! let mut gen = CatalogGenerator::new();
//! gen.add_placement(Square::new(7, 7), false, &[Some(Tile::letter(1)), Some(Tile::letter(2))], 10);
//!
//! let racks = [
//!     Rack::from_tiles(&[Tile::letter(1), Tile::letter(2)]),
//!     Rack::from_tiles(&[Tile::letter(3)]),
//! ];
//! let pos = Position::new(Board::new(), racks, [0, 0], 0, LetterValues::english());
//!
//! let mut solver = Solver::new(gen.clone(), gen, pos, SolverConfig::default()).unwrap();
//! let solution = solver.solve(&CancelToken::new(), 2).unwrap();
//! // Going out scores 10 plus twice the opponent's C
//! assert_eq!(solution.value, 16.0);
//! assert_eq!(solution.sequence.len(), 1);
//! ```

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::SolverConfig;
use crate::error::{SolverError, SolverResult};
use crate::eval::{self, plays_out};
use crate::game::{GameState, MoveGenerator, SortMode};
use crate::moves::Move;
use crate::tiles::Rack;

use super::{CancelToken, KillerCache, KillerProbe, NodeArena, NodeId, NodeValue, ZobristTable};

/// Infinity for alpha-beta bounds
const INF: f32 = f32::INFINITY;

/// Deepest ply budget accepted by [`Solver::solve`].
pub const MAX_PLIES: usize = u8::MAX as usize;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive calls made, across all depths
    pub nodes: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Killer moves found among the candidates
    pub killer_hits: u64,
    /// Killer moves missing from the candidates (key collisions)
    pub killer_collisions: u64,
}

impl SearchStats {
    /// Share of killer probes that found their move, in percent
    pub fn killer_hit_rate(&self) -> f64 {
        let probes = self.killer_hits + self.killer_collisions;
        if probes == 0 {
            0.0
        } else {
            self.killer_hits as f64 / probes as f64 * 100.0
        }
    }
}

/// Outcome of a completed search.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Spread change for the player on turn at the root
    pub value: f32,
    /// Principal variation in play order
    pub sequence: Vec<Move>,
    /// Deepest completed iteration
    pub depth: usize,
    pub stats: SearchStats,
}

impl Solution {
    /// First move of the principal variation.
    #[inline]
    pub fn best_move(&self) -> Option<&Move> {
        self.sequence.first()
    }
}

/// Space-separated move list for logging.
fn format_sequence(seq: &[Move]) -> String {
    seq.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Append a pass keeping the whole rack, unless one is already listed.
fn add_pass(plays: &mut Vec<Move>, rack: &Rack) {
    if !plays.iter().any(Move::is_pass) {
        plays.push(Move::pass(rack.tiles()));
    }
}

// =============================================================================
// Solver
// =============================================================================

/// Endgame solver owning its collaborators.
///
/// `stm_gen` generates for the side to move at every node; `ots_gen`
/// generates the opponent's replies for the two-ply evaluator.
pub struct Solver<G, M> {
    stm_gen: M,
    ots_gen: M,
    game: G,
    config: SolverConfig,
    zobrist: ZobristTable,
    killers: KillerCache,
    arena: NodeArena,
    /// Player on turn at the root
    maximizer: usize,
    initial_spread: i32,
    /// Total ply budget of the current solve
    plies: usize,
    stats: SearchStats,
    last_pv: Vec<Move>,
}

impl<G, M> Solver<G, M>
where
    G: GameState,
    M: MoveGenerator,
{
    /// Create a solver for a two-player game.
    pub fn new(stm_gen: M, ots_gen: M, game: G, config: SolverConfig) -> SolverResult<Self> {
        config.validate()?;
        let found = game.num_players();
        if found != 2 {
            return Err(SolverError::UnsupportedPlayerCount { found });
        }
        let dim = game.board().dim();
        Ok(Self {
            stm_gen,
            ots_gen,
            game,
            config,
            zobrist: ZobristTable::new(dim),
            killers: KillerCache::new(),
            arena: NodeArena::new(),
            maximizer: 0,
            initial_spread: 0,
            plies: 0,
            stats: SearchStats::default(),
            last_pv: Vec::new(),
        })
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Replace the configuration after validating it.
    pub fn set_config(&mut self, config: SolverConfig) -> SolverResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[inline]
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Mutable access to the game, e.g. to advance it between solves.
    #[inline]
    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Statistics of the last solve, including an aborted depth.
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Principal variation of the last completed depth.
    #[inline]
    pub fn principal_variation(&self) -> &[Move] {
        &self.last_pv
    }

    /// Take back the generators and the game.
    pub fn into_parts(self) -> (M, M, G) {
        (self.stm_gen, self.ots_gen, self.game)
    }

    /// Valued and sorted candidates for the side to move, as a one-ply search
    /// would order them. No recursion.
    pub fn static_candidates(&mut self) -> Vec<Move> {
        self.with_endgame_modes(|solver| solver.generate_candidates(1, 1, true))
    }

    /// Run `f` with the endgame scoreless-turn limit and generator sort
    /// modes in place, restoring them afterwards.
    fn with_endgame_modes<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved_turns = self.game.max_scoreless_turns();
        let saved_ots_sort = self.ots_gen.sort_mode();
        self.game
            .set_max_scoreless_turns(self.config.endgame_max_scoreless_turns);
        self.stm_gen.set_sort_mode(SortMode::None);
        self.ots_gen.set_sort_mode(SortMode::ByScore);

        let out = f(self);

        self.game.set_max_scoreless_turns(saved_turns);
        self.stm_gen.set_sort_mode(SortMode::ByScore);
        self.ots_gen.set_sort_mode(saved_ots_sort);
        out
    }

    /// Iterative deepening driver. Runs on the solve thread.
    fn iterate(&mut self, cancel: &CancelToken, plies: usize) -> SolverResult<Solution> {
        self.plies = plies;
        self.stats = SearchStats::default();
        self.killers.clear();
        self.last_pv.clear();
        self.maximizer = self.game.player_on_turn();
        self.initial_spread = self.game.spread_for(self.maximizer);
        debug!(
            maximizer = self.maximizer,
            turn = self.game.turn(),
            initial_spread = self.initial_spread,
            scoreless_turns = self.game.scoreless_turns(),
            "endgame root"
        );

        let first = if self.config.iterative_deepening { 1 } else { plies };
        let mut best: Option<Solution> = None;

        for depth in first..=plies {
            self.zobrist.initialize(self.game.board().dim());
            let key = self.root_key();
            let root = self.arena.reset(depth as u8);

            match self.alphabeta(cancel, root, key, depth, -INF, INF, true) {
                Ok(leaf) => {
                    let value = self.arena.value(root).value;
                    let sequence = self.arena.sequence(leaf);
                    info!(
                        depth,
                        value,
                        pv = %format_sequence(&sequence),
                        nodes = self.stats.nodes,
                        killers = self.killers.len(),
                        "depth complete"
                    );
                    self.last_pv = sequence.clone();
                    best = Some(Solution {
                        value,
                        sequence,
                        depth,
                        stats: SearchStats::default(),
                    });
                }
                Err(SolverError::Cancelled) => {
                    info!(depth, nodes = self.stats.nodes, "search stopped mid-depth");
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        let mut solution = best.ok_or(SolverError::NoSolution)?;
        solution.stats = self.stats.clone();
        Ok(solution)
    }

    fn root_key(&self) -> u64 {
        let minimizer = 1 - self.maximizer;
        self.zobrist.hash(
            self.game.board(),
            self.game.rack_for(self.maximizer),
            self.game.rack_for(minimizer),
            self.game.player_on_turn() != self.maximizer,
        )
    }

    /// Minimax with alpha-beta pruning. Returns the leaf at the end of the
    /// best line; the node's value is set to the leaf's value.
    ///
    /// The game state is identical before and after the call, errors included.
    #[allow(clippy::too_many_arguments)]
    fn alphabeta(
        &mut self,
        cancel: &CancelToken,
        node: NodeId,
        key: u64,
        depth: usize,
        mut alpha: f32,
        mut beta: f32,
        maximizing: bool,
    ) -> SolverResult<NodeId> {
        if cancel.is_cancelled() {
            return Err(SolverError::Cancelled);
        }
        if let Some(limit) = self.config.node_limit {
            if self.stats.nodes >= limit {
                return Err(SolverError::Cancelled);
            }
        }
        self.stats.nodes += 1;

        if depth == 0 || self.game.is_over() {
            let value = self.horizon(node, maximizing);
            self.arena.set_value(node, value);
            return Ok(node);
        }

        let parent_placed_nothing = self
            .arena
            .get(node)
            .mv
            .as_ref()
            .map_or(true, |m| m.placed().is_empty());
        let mut plays = self.generate_candidates(depth, self.plies, parent_placed_nothing);

        if self.config.killer_moves {
            match self.killers.promote(key, &mut plays) {
                KillerProbe::Hit => self.stats.killer_hits += 1,
                KillerProbe::Collision => {
                    self.stats.killer_collisions += 1;
                    if let Some(killer) = self.killers.get(key) {
                        warn!(
                            key,
                            killer = %killer,
                            candidates = plays.len(),
                            "killer move not among candidates; zobrist collision"
                        );
                    }
                }
                KillerProbe::Miss => {}
            }
        }

        let mut best_value = if maximizing { -INF } else { INF };
        let mut best: Option<(NodeId, usize)> = None;

        for (idx, play) in plays.iter().enumerate() {
            self.game.play_move(play);
            let child_key = self.zobrist.add_move(key, play, maximizing);
            let child = self.arena.push_child(node, play.clone(), (depth - 1) as u8);
            let searched =
                self.alphabeta(cancel, child, child_key, depth - 1, alpha, beta, !maximizing);
            self.game.unplay_last_move();
            let leaf = searched?;

            let value = self.arena.value(leaf).value;
            let improves = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improves {
                best_value = value;
                best = Some((leaf, idx));
            } else {
                self.arena.rewind(child);
            }

            if maximizing {
                alpha = alpha.max(best_value);
            } else {
                beta = beta.min(best_value);
            }
            if self.config.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        let Some((leaf, idx)) = best else {
            let value = self.horizon(node, maximizing);
            self.arena.set_value(node, value);
            return Ok(node);
        };

        let known_end = self.arena.value(leaf).known_end;
        self.arena.set_value(
            node,
            NodeValue {
                value: best_value,
                known_end,
            },
        );
        if self.config.killer_moves {
            self.killers.store(key, plays.swap_remove(idx));
        }
        Ok(leaf)
    }

    /// Static value of `node` in the current game state.
    fn horizon(&self, node: NodeId, maximizing: bool) -> NodeValue {
        let spread_delta = self.game.spread_for(self.maximizer) - self.initial_spread;
        eval::horizon_value(
            spread_delta,
            self.arena.get(node).mv.as_ref(),
            !maximizing,
            self.game.is_over(),
            self.config.complex_evaluation,
            self.config.future_adjustment,
        )
    }

    /// Candidates for the side to move, valued and sorted best first.
    ///
    /// A pass is added when the rack holds more than one tile, nothing
    /// plays out, and either more than one ply is searched or the
    /// previous move placed nothing. A player with no candidates passes.
    fn generate_candidates(
        &mut self,
        depth: usize,
        plies: usize,
        parent_placed_nothing: bool,
    ) -> Vec<Move> {
        let on_turn = self.game.player_on_turn();
        let board = self.game.board();
        let rack = self.game.rack_for(on_turn);
        let opp_rack = self.game.rack_for(1 - on_turn);
        let values = self.game.letter_values();
        let rack_len = rack.num_tiles();

        let mut plays = self.stm_gen.generate_all(board, rack, false);
        let wants_pass = rack_len > 1
            && (plies > 1 || parent_placed_nothing)
            && !plays.iter().any(|p| plays_out(p, rack_len));
        if plays.is_empty() || wants_pass {
            add_pass(&mut plays, rack);
        }

        if self.config.complex_evaluation {
            let mut replies = self.ots_gen.generate_all(board, opp_rack, false);
            replies.truncate(self.config.opp_reply_limit);
            add_pass(&mut replies, opp_rack);
            eval::value_complex(
                &mut plays,
                &replies,
                rack,
                opp_rack,
                values,
                self.config.future_adjustment,
            );
        } else {
            eval::value_simple(&mut plays, rack_len, opp_rack.score_on(values), depth);
        }

        eval::sort_by_valuation(&mut plays);
        plays
    }
}

impl<G, M> Solver<G, M>
where
    G: GameState + Send,
    M: MoveGenerator + Send,
{
    /// Search up to `plies` moves ahead and return the best line found.
    ///
    /// With iterative deepening on, a cancellation returns the deepest
    /// completed iteration. The search runs on a scoped thread that is
    /// joined before returning; the game is back in its starting state
    /// whatever the outcome.
    pub fn solve(&mut self, cancel: &CancelToken, plies: usize) -> SolverResult<Solution> {
        if plies == 0 || plies > MAX_PLIES {
            return Err(SolverError::InvalidPlyBudget);
        }
        let remaining = self.game.bag_remaining();
        if remaining > 0 {
            return Err(SolverError::PositionNotDetermined { remaining });
        }

        info!(
            plies,
            iterative_deepening = self.config.iterative_deepening,
            complex_evaluation = self.config.complex_evaluation,
            pruning = self.config.pruning,
            killer_moves = self.config.killer_moves,
            "solving endgame"
        );
        let start = Instant::now();

        // Join inside, resume outside, so the limits are restored even when
        // the solve thread panics.
        let joined = self.with_endgame_modes(|solver| {
            std::thread::scope(|s| s.spawn(move || solver.iterate(cancel, plies)).join())
        });
        let result = joined.unwrap_or_else(|panic| std::panic::resume_unwind(panic));

        let elapsed_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(solution) => info!(
                value = solution.value,
                depth = solution.depth,
                nodes = solution.stats.nodes,
                elapsed_ms,
                "solve returning"
            ),
            Err(err) => info!(error = %err, elapsed_ms, "solve returning without a solution"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::fixtures::{self, contested, forced_two_ply, solver};
    use crate::game::{CatalogGenerator, Position};

    fn solve(config: SolverConfig, plies: usize) -> Solution {
        let (gen, pos) = contested();
        solver(gen, pos, config)
            .solve(&CancelToken::new(), plies)
            .unwrap()
    }

    fn assert_same_line(a: &[Move], b: &[Move]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!(x.same_play(y), "{x} != {y}");
        }
    }

    #[test]
    fn test_forced_two_ply_line() {
        let (gen, pos) = forced_two_ply();
        let mut s = solver(gen, pos, SolverConfig::default());
        let solution = s.solve(&CancelToken::new(), 2).unwrap();

        // Exactly the first move's score minus the reply's
        assert_eq!(solution.value, 6.0);
        assert_eq!(solution.depth, 2);
        assert_eq!(solution.sequence.len(), 2);
        assert!(solution.sequence[0].same_play(&fixtures::forced_first()));
        assert!(solution.sequence[1].same_play(&fixtures::forced_reply()));
        assert_same_line(s.principal_variation(), &solution.sequence);
    }

    #[test]
    fn test_one_ply_sees_only_first_move() {
        let (gen, pos) = forced_two_ply();
        let solution = solver(gen, pos, SolverConfig::default())
            .solve(&CancelToken::new(), 1)
            .unwrap();
        assert_eq!(solution.value, 10.0);
        assert_eq!(solution.sequence.len(), 1);
    }

    #[test]
    fn test_deterministic() {
        let a = solve(SolverConfig::default(), 4);
        let b = solve(SolverConfig::default(), 4);
        assert_eq!(a.value, b.value);
        assert_eq!(a.depth, b.depth);
        assert_eq!(a.stats, b.stats);
        assert_same_line(&a.sequence, &b.sequence);
    }

    #[test]
    fn test_pruning_does_not_change_value() {
        let full = solve(
            SolverConfig {
                pruning: false,
                ..SolverConfig::default()
            },
            4,
        );
        let pruned = solve(SolverConfig::default(), 4);
        assert_eq!(full.value, pruned.value);
        assert!(pruned.stats.nodes <= full.stats.nodes);
        assert_eq!(full.stats.cutoffs, 0);
        assert!(full.sequence[0].same_play(&pruned.sequence[0]));
    }

    #[test]
    fn test_killers_do_not_change_value() {
        let without = solve(
            SolverConfig {
                killer_moves: false,
                ..SolverConfig::default()
            },
            4,
        );
        let with = solve(SolverConfig::default(), 4);
        assert_eq!(without.value, with.value);
        assert_eq!(without.stats.killer_hits, 0);
        assert!(with.stats.killer_hits > 0);
        assert_eq!(with.stats.killer_collisions, 0);
    }

    #[test]
    fn test_single_pass_matches_iterative_deepening() {
        let single = solve(
            SolverConfig {
                iterative_deepening: false,
                ..SolverConfig::default()
            },
            3,
        );
        let deepening = solve(SolverConfig::default(), 3);
        assert_eq!(single.value, deepening.value);
        assert_eq!(single.depth, 3);
    }

    #[test]
    fn test_node_budget_falls_back_to_last_depth() {
        let shallow = solve(SolverConfig::default(), 2);
        let limited = solve(
            SolverConfig {
                node_limit: Some(shallow.stats.nodes),
                ..SolverConfig::default()
            },
            3,
        );
        assert_eq!(limited.depth, 2);
        assert_eq!(limited.value, shallow.value);
        assert_same_line(&limited.sequence, &shallow.sequence);
    }

    #[test]
    fn test_cancelled_before_any_depth() {
        let (gen, pos) = contested();
        let mut s = solver(gen, pos, SolverConfig::default());
        let token = CancelToken::new();
        token.cancel();
        assert_eq!(s.solve(&token, 3).unwrap_err(), SolverError::NoSolution);
    }

    #[test]
    fn test_abort_restores_game() {
        let (gen, pos) = contested();
        let before = pos.clone();
        let mut s = solver(
            gen,
            pos,
            SolverConfig {
                node_limit: Some(1),
                ..SolverConfig::default()
            },
        );
        assert_eq!(s.solve(&CancelToken::new(), 2).unwrap_err(), SolverError::NoSolution);
        assert_eq!(s.game().history_len(), 0);
        assert_eq!(s.game().board(), before.board());
        assert_eq!(s.game().scores(), before.scores());
        assert_eq!(s.game().rack_for(0).tiles(), before.rack_for(0).tiles());
        assert_eq!(s.game().rack_for(1).tiles(), before.rack_for(1).tiles());
    }

    #[test]
    fn test_solve_restores_limits_and_sort_modes() {
        let (gen, pos) = contested();
        let mut s = solver(gen, pos, SolverConfig::default());
        let saved = s.game().max_scoreless_turns();
        s.solve(&CancelToken::new(), 3).unwrap();
        assert_eq!(s.game().max_scoreless_turns(), saved);
        assert_eq!(s.game().history_len(), 0);

        let (stm, ots, _) = s.into_parts();
        assert_eq!(stm.sort_mode(), SortMode::ByScore);
        assert_eq!(ots.sort_mode(), SortMode::None);
    }

    #[test]
    fn test_complex_evaluation_solves() {
        let config = SolverConfig {
            complex_evaluation: true,
            ..SolverConfig::default()
        };
        let solution = solve(config.clone(), 3);
        assert_eq!(solution.depth, 3);
        assert!(!solution.sequence.is_empty());

        // A line that always reaches the end is valued exactly in both modes
        let (gen, pos) = forced_two_ply();
        let exact = solver(gen, pos, config)
            .solve(&CancelToken::new(), 2)
            .unwrap();
        assert_eq!(exact.value, 6.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        let (gen, pos) = contested();
        let mut s = solver(gen.clone(), pos.clone(), SolverConfig::default());
        assert_eq!(
            s.solve(&CancelToken::new(), 0).unwrap_err(),
            SolverError::InvalidPlyBudget
        );

        let bagged = pos.clone().with_bag(vec![fixtures::letter(1), fixtures::letter(2)]);
        let mut s = solver(gen.clone(), bagged, SolverConfig::default());
        assert_eq!(
            s.solve(&CancelToken::new(), 2).unwrap_err(),
            SolverError::PositionNotDetermined { remaining: 2 }
        );

        let bad = SolverConfig {
            opp_reply_limit: 0,
            ..SolverConfig::default()
        };
        assert!(matches!(
            Solver::new(gen.clone(), gen, pos, bad),
            Err(SolverError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_pass_added_only_when_useful() {
        // Rack of one tile: no pass alongside a real play
        let (gen, pos) = fixtures::single_tile();
        let mut s: Solver<Position, CatalogGenerator> = solver(gen, pos, SolverConfig::default());
        let candidates = s.static_candidates();
        assert_eq!(candidates.len(), 1);
        assert!(!candidates[0].is_pass());

        // Nothing playable: a pass is supplied
        let (gen, pos) = fixtures::stuck_player();
        let mut s = solver(gen, pos, SolverConfig::default());
        let candidates = s.static_candidates();
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].is_pass());
    }

    #[test]
    fn test_pass_at_last_ply_follows_parent_move() {
        // A plus a blank, only A playable: two tiles, no out play
        let (gen, pos) = forced_two_ply();
        let mut s = solver(gen, pos, SolverConfig::default());

        let after_placement = s.with_endgame_modes(|s| s.generate_candidates(1, 1, false));
        assert_eq!(after_placement.len(), 1);
        assert!(!after_placement[0].is_pass());

        let after_pass = s.with_endgame_modes(|s| s.generate_candidates(1, 1, true));
        assert_eq!(after_pass.len(), 2);
        assert_eq!(after_pass.iter().filter(|m| m.is_pass()).count(), 1);

        let deeper = s.with_endgame_modes(|s| s.generate_candidates(2, 2, false));
        assert_eq!(deeper.iter().filter(|m| m.is_pass()).count(), 1);
    }

    #[derive(Default)]
    struct FailingGenerator {
        sort_mode: SortMode,
    }

    impl MoveGenerator for FailingGenerator {
        fn generate_all(&mut self, _: &Board, _: &Rack, _: bool) -> Vec<Move> {
            panic!("generator failure");
        }

        fn set_sort_mode(&mut self, mode: SortMode) {
            self.sort_mode = mode;
        }

        fn sort_mode(&self) -> SortMode {
            self.sort_mode
        }
    }

    #[test]
    fn test_panic_on_solve_thread_restores_limits() {
        let (_, mut pos) = contested();
        pos.set_max_scoreless_turns(9);
        let ots = FailingGenerator {
            sort_mode: SortMode::None,
        };
        let mut s = Solver::new(FailingGenerator::default(), ots, pos, SolverConfig::default())
            .unwrap();

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            s.solve(&CancelToken::new(), 2)
        }));
        assert!(outcome.is_err());
        assert_eq!(s.game().max_scoreless_turns(), 9);
        assert_eq!(s.game().history_len(), 0);

        let (stm, ots, _) = s.into_parts();
        assert_eq!(stm.sort_mode(), SortMode::ByScore);
        assert_eq!(ots.sort_mode(), SortMode::None);
    }

    #[test]
    fn test_no_pass_beside_out_play() {
        let (gen, pos) = contested();
        let mut s = solver(gen, pos, SolverConfig::default());
        let candidates = s.static_candidates();
        assert!(candidates.iter().all(|m| !m.is_pass()));
        // Out play valued as score plus twice the opponent's rack
        let out = &candidates[0];
        assert_eq!(out.tiles_played(), 3);
        let opp_value = s.game().rack_for(1).score_on(s.game().letter_values());
        assert_eq!(out.valuation(), (out.score() + 2 * opp_value) as f32);
    }

    #[test]
    fn test_killer_hit_rate() {
        let stats = SearchStats {
            killer_hits: 3,
            killer_collisions: 1,
            ..SearchStats::default()
        };
        assert_eq!(stats.killer_hit_rate(), 75.0);
        assert_eq!(SearchStats::default().killer_hit_rate(), 0.0);
    }
}
