//! Mount liveness and teardown bookkeeping

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared liveness flag for one hero mount
///
/// Cloned into the background loader; cancelled at teardown. Work that finds
/// the token cancelled must not touch the scene.
#[derive(Debug, Clone)]
pub struct MountToken(Arc<AtomicBool>);

impl MountToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Registrations held by a mounted hero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    pub frame_scheduled: bool,
    pub pointer_listener: bool,
    pub resize_listener: bool,
    pub disposed: bool,
}

impl Lifecycle {
    pub fn mounted() -> Self {
        Self {
            frame_scheduled: true,
            pointer_listener: true,
            resize_listener: true,
            disposed: false,
        }
    }

    /// Drops every registration; returns false if already torn down
    pub fn teardown(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.frame_scheduled = false;
        self.pointer_listener = false;
        self.resize_listener = false;
        self.disposed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelling_a_clone_cancels_all() {
        let token = MountToken::new();
        let worker_copy = token.clone();
        assert!(worker_copy.is_live());
        token.cancel();
        assert!(!worker_copy.is_live());
    }

    #[test]
    fn teardown_runs_once() {
        let mut lifecycle = Lifecycle::mounted();
        assert!(lifecycle.teardown());
        assert!(!lifecycle.teardown());
        assert!(!lifecycle.frame_scheduled && !lifecycle.pointer_listener && !lifecycle.resize_listener);
    }
}
