//! Runtime deprecation warnings.
//!
//! A few operations survive only for compatibility: implicit `None`
//! coercion in [`Maybe::fmap_nullable`](crate::family::Maybe::fmap_nullable)
//! and family inference in [`List::infer_tag`](crate::list::List::infer_tag).
//! Each use emits a `tracing` warning on the `rightward::deprecation` target
//! unless warnings have been switched off process-wide.
//!
//! ```rust
//! use rightward::deprecation;
//!
//! deprecation::set_warnings(false);
//! assert!(!deprecation::warnings_enabled());
//! deprecation::set_warnings(true);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

static WARNINGS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Enables or disables deprecation warnings for the whole process.
pub fn set_warnings(enabled: bool) {
    WARNINGS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether deprecation warnings are currently emitted.
pub fn warnings_enabled() -> bool {
    WARNINGS_ENABLED.load(Ordering::Relaxed)
}

#[track_caller]
pub(crate) fn warn(operation: &'static str, replacement: &'static str) {
    if warnings_enabled() {
        let location = std::panic::Location::caller();
        tracing::warn!(
            target: "rightward::deprecation",
            operation,
            replacement,
            %location,
            "deprecated operation used"
        );
    }
}
