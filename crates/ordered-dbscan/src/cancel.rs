//! Cooperative cancellation for long clustering sweeps.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A handle that a caller can use to ask a running sweep to stop.
///
/// Clones share the same flag, so the caller keeps one clone and hands another
/// to the clustering call. The sweep only looks at the flag between outer
/// iterations; a cluster that is being expanded is always finished first.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a new token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. This cannot be undone.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested on this token or any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
