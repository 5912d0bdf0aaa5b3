//! Cooperative cancellation for a running solve
//!
//! A [`CancelToken`] is cheap to clone; every clone observes the same flag.
//! The search polls it at the entry of each recursive call.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use endgame::search::CancelToken;
//!
//! let token = CancelToken::with_timeout(Duration::from_secs(30));
//! let handle = token.clone();
//! assert!(!token.is_cancelled());
//! handle.cancel();
//! assert!(token.is_cancelled());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared stop signal with an optional deadline.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    stopped: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// Token that only stops when [`cancel`](Self::cancel) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Token that also stops once `limit` has elapsed from now.
    #[must_use]
    pub fn with_timeout(limit: Duration) -> Self {
        Self::with_deadline(Instant::now() + limit)
    }

    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    /// Request a stop. Visible to every clone.
    pub fn cancel(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    /// Check the flag and the deadline; a passed deadline latches the flag.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.stopped.store(true, Ordering::Relaxed);
                return true;
            }
        }
        false
    }
}
