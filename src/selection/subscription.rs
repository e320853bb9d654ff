use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Keeps the selection watcher listening. Dropping it stops the watcher
/// from reacting to pointer events.
#[derive(Debug)]
pub struct SelectionSubscription {
    active: Arc<AtomicBool>,
}

impl SelectionSubscription {
    pub(super) fn new(active: Arc<AtomicBool>) -> Self {
        active.store(true, Ordering::SeqCst);
        Self { active }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl Drop for SelectionSubscription {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
    }
}
