use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that ends a response collection early.
///
/// Lock-free and cloneable; the session checks it once per poll
/// iteration, so cancellation lands within one poll interval.
#[derive(Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelHandle {
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request that the in-flight collection stop.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Clear the flag so the handle can cover the next command.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
