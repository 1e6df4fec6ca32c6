use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A flag another thread can raise to stop a running search. The search
/// samples it once per node.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Lowers the flag so the token can be reused for the next search.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}
