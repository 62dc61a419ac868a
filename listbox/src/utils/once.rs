//! One-shot latch for run-once initialization.

use std::sync::atomic::{AtomicBool, Ordering};

/// A latch that grants exactly one caller the right to run an initialization
/// step, optionally gated by a predicate.
///
/// # Example
///
/// ```
/// use listbox::utils::OnceLatch;
///
/// let latch = OnceLatch::new();
/// assert!(latch.fire());
/// assert!(!latch.fire());
/// ```
#[derive(Debug, Default)]
pub struct OnceLatch {
    fired: AtomicBool,
}

impl OnceLatch {
    /// Create an open latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the latch. Returns `true` exactly once.
    pub fn fire(&self) -> bool {
        !self.fired.swap(true, Ordering::SeqCst)
    }

    /// Claim the latch only if `predicate` holds. The latch stays open when
    /// the predicate fails, so a later qualifying call can still win.
    pub fn fire_if(&self, predicate: impl FnOnce() -> bool) -> bool {
        if self.fired.load(Ordering::SeqCst) {
            return false;
        }
        if predicate() { self.fire() } else { false }
    }

    /// Check whether the latch has been claimed.
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}
