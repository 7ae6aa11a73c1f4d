use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use bitflags::bitflags;
use tokio::sync::Notify;

use crate::signal::Signal;

bitflags! {
    /// Things the host has to do before the next frame.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Update: u8 {
        /// Re-evaluate widget state.
        const EVAL = 0b0001;
        /// Redraw the widget tree.
        const DRAW = 0b0010;
        /// Recompute layout.
        const LAYOUT = 0b0100;
        /// Force a full update regardless of caching.
        const FORCE = 0b1000;
    }
}

struct Inner {
    flags: AtomicU8,
    notify: Notify,
}

/// A shared, thread-safe set of pending [Update] flags.
///
/// Any thread may raise flags. The UI loop reads and clears them, and can
/// wait for them asynchronously with [UpdateManager::notified].
#[derive(Clone)]
pub struct UpdateManager {
    inner: Arc<Inner>,
}

impl UpdateManager {
    /// Create a new manager with no pending updates.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                flags: AtomicU8::new(0),
                notify: Notify::new(),
            }),
        }
    }

    /// Raise the given flags and wake the UI loop.
    pub fn insert(&self, update: Update) {
        log::trace!("update requested: {:?}", update);
        self.inner.flags.fetch_or(update.bits(), Ordering::AcqRel);
        if !update.is_empty() {
            self.inner.notify.notify_one();
        }
    }

    /// Clear the given flags.
    pub fn remove(&self, update: Update) {
        self.inner.flags.fetch_and(!update.bits(), Ordering::AcqRel);
    }

    /// Get the pending flags.
    pub fn get(&self) -> Update {
        Update::from_bits_truncate(self.inner.flags.load(Ordering::Acquire))
    }

    /// Replace the pending flags.
    pub fn set(&self, update: Update) {
        self.inner.flags.store(update.bits(), Ordering::Release);
        if !update.is_empty() {
            self.inner.notify.notify_one();
        }
    }

    /// Return the pending flags and clear them.
    pub fn take(&self) -> Update {
        Update::from_bits_truncate(self.inner.flags.swap(0, Ordering::AcqRel))
    }

    /// Wait until flags are raised.
    ///
    /// Completes immediately if flags were raised since the last wait.
    pub async fn notified(&self) {
        self.inner.notify.notified().await;
    }

    /// Hook the given [Signal] so every change raises `update`.
    pub fn hook_signal<T: 'static, S: Signal<T> + ?Sized>(&self, signal: &S, update: Update) {
        let manager = self.clone();

        signal.listen(Box::new(move |_| {
            manager.insert(update);
        }));
    }
}

impl Default for UpdateManager {
    fn default() -> Self {
        Self::new()
    }
}
