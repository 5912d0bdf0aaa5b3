//! Killer-move cache for move ordering
//!
//! Maps a position key to the move that was best there in an earlier
//! (shallower) iteration. One slot per key, last writer wins. The cache is
//! an ordering hint only: a stale or colliding entry costs pruning
//! efficiency, never correctness.
//!
//! # Example
//!
//! ```
//! use endgame::moves::Move;
//! use endgame::search::{KillerCache, KillerProbe};
//!
//! let mut cache = KillerCache::new();
//! cache.store(0xABCD, Move::pass(vec![]));
//!
//! let mut candidates = vec![Move::pass(vec![])];
//! assert_eq!(cache.promote(0xABCD, &mut candidates), KillerProbe::Hit);
//! assert_eq!(cache.promote(0x1234, &mut candidates), KillerProbe::Miss);
//! ```

use std::collections::HashMap;

use crate::moves::Move;

/// Outcome of looking up a killer move for a candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillerProbe {
    /// No entry for this key
    Miss,
    /// Entry found and moved to the front of the candidates
    Hit,
    /// Entry found but absent from the candidates (key collision)
    Collision,
}

/// Position key -> best move, single slot per key.
#[derive(Debug, Default)]
pub struct KillerCache {
    entries: HashMap<u64, Move>,
}

impl KillerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached move for a key.
    #[must_use]
    pub fn get(&self, key: u64) -> Option<&Move> {
        self.entries.get(&key)
    }

    /// Store the best move for a key, replacing any previous entry.
    pub fn store(&mut self, key: u64, mv: Move) {
        self.entries.insert(key, mv);
    }

    /// Move the cached move for `key` to the front of `candidates`,
    /// keeping the relative order of the others.
    pub fn promote(&self, key: u64, candidates: &mut [Move]) -> KillerProbe {
        let Some(killer) = self.entries.get(&key) else {
            return KillerProbe::Miss;
        };
        match candidates.iter().position(|m| m.same_play(killer)) {
            Some(idx) => {
                candidates[..=idx].rotate_right(1);
                KillerProbe::Hit
            }
            None => KillerProbe::Collision,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
