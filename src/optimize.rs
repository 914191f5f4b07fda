//! The process-wide fast/mid-path toggle (spec.md §5, §9).
//!
//! A testing aid only: flipping it forces every parse through the
//! authoritative big-number path (component E) so the fast and mid paths
//! can be checked against it for agreement. Production callers never touch
//! this. Modeled as an `AtomicBool` rather than a bare `static mut` so
//! individual reads/writes stay memory-safe in Rust's model; spec.md is
//! explicit that *sequences* of flips still need caller-side serialization,
//! which this type does not attempt to provide.

use core::sync::atomic::{AtomicBool, Ordering};

static OPTIMIZE: AtomicBool = AtomicBool::new(true);

/// `true` unless a test has turned the fast/mid paths off.
#[inline]
pub(crate) fn enabled() -> bool {
    OPTIMIZE.load(Ordering::Relaxed)
}

/// Set the toggle, returning its previous value. See [`crate::set_optimize`].
pub(crate) fn set(enable: bool) -> bool {
    OPTIMIZE.swap(enable, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_enabled() {
        assert!(enabled());
    }

    #[test]
    fn set_returns_previous_value() {
        let prev = set(false);
        assert!(prev);
        assert!(!enabled());
        let prev2 = set(true);
        assert!(!prev2);
        assert!(enabled());
    }
}
