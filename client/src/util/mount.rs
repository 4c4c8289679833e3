//! Liveness flag for async work started by a page.
//!
//! A page spawns its request and checks the guard before touching its
//! signals; the flag drops when the page unmounts, so a late response is
//! ignored instead of updating a disposed view.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Guard released by the current reactive owner's cleanup.
    pub fn install() -> Self {
        let guard = Self::new();
        let on_unmount = guard.clone();
        leptos::prelude::on_cleanup(move || on_unmount.release());
        guard
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn release(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}
