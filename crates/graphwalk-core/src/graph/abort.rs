use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag shared between a running traversal and
/// whoever hosts it (a Ctrl-C handler, a deadline, a test).
///
/// Engines poll it at fixed points and return [`Outcome::Aborted`](super::Outcome::Aborted)
/// once it is set. Setting it never interrupts a callback in progress.
#[derive(Debug, Clone, Default)]
pub struct AbortSignal {
    requested: Arc<AtomicBool>,
}

impl AbortSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Clear a previous request so the engine can be run again.
    pub fn reset(&self) {
        self.requested.store(false, Ordering::SeqCst);
    }
}
