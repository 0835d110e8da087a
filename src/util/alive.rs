//! Unmount guard for in-flight async work.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigating away does not abort an in-flight HTTP call, so every spawned
//! task carries a clone of its view's `AliveFlag` and checks it before
//! applying results. The view retires the flag in `on_cleanup`; a resolution
//! that arrives after teardown is discarded instead of written into
//! unmounted state.

#[cfg(test)]
#[path = "alive_test.rs"]
mod alive_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared liveness flag between a view and the tasks it spawns.
#[derive(Clone, Debug)]
pub struct AliveFlag {
    inner: Arc<AtomicBool>,
}

impl AliveFlag {
    /// A fresh flag, live until [`retire`](Self::retire) is called.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the owning view is still mounted.
    pub fn is_alive(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }

    /// Mark the owning view as torn down.
    pub fn retire(&self) {
        self.inner.store(false, Ordering::Relaxed);
    }
}

impl Default for AliveFlag {
    fn default() -> Self {
        Self::new()
    }
}
