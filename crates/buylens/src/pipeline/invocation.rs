//! Invocation tokens: a latest-wins guard for overlapping analyses.
//!
//! Invocations are not deduplicated: a second button press while the first
//! request is in flight starts an independent run. The tracker hands out
//! monotonically increasing tokens and lets the surface applier discard a
//! result when a later invocation has already painted.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct InvocationTracker {
    next: AtomicU64,
    applied: AtomicU64,
}

impl InvocationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new invocation and returns its token. Tokens start at 1.
    pub fn begin(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Claims the right to paint the result for `token`. Returns `false`
    /// when an equal-or-later invocation has already painted.
    pub fn try_apply(&self, token: u64) -> bool {
        let mut current = self.applied.load(Ordering::Acquire);
        loop {
            if token <= current {
                return false;
            }
            match self.applied.compare_exchange_weak(
                current,
                token,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_invocations_all_apply() {
        let tracker = InvocationTracker::new();
        let first = tracker.begin();
        assert!(tracker.try_apply(first));
        let second = tracker.begin();
        assert!(tracker.try_apply(second));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let tracker = InvocationTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        // The second invocation resolves first and paints
        assert!(tracker.try_apply(second));
        // The first invocation's result lands afterwards and must not paint
        assert!(!tracker.try_apply(first));
    }

    #[test]
    fn test_double_apply_of_same_token_is_rejected() {
        let tracker = InvocationTracker::new();
        let token = tracker.begin();
        assert!(tracker.try_apply(token));
        assert!(!tracker.try_apply(token));
    }

    #[test]
    fn test_tokens_are_monotonic() {
        let tracker = InvocationTracker::new();
        let a = tracker.begin();
        let b = tracker.begin();
        let c = tracker.begin();
        assert!(a < b && b < c);
    }
}
