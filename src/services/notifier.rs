//! Change Notifier
//!
//! Synchronous publish/subscribe registry for size category changes. Callbacks
//! run on the publishing thread before `notify` returns; channel subscribers
//! receive the event through an unbounded crossbeam channel.

use crate::domain::SizeCategory;
use crossbeam_channel::{Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Event published whenever the size category is assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeCategoryChanged {
    /// The newly assigned category
    pub category: SizeCategory,
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn(&SizeCategoryChanged) + Send + Sync>;

/// Registry of change subscribers
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: AtomicU64,
    callbacks: RwLock<Vec<(SubscriptionId, Callback)>>,
    senders: Mutex<Vec<Sender<SizeCategoryChanged>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&SizeCategoryChanged) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.callbacks.write().push((id, Arc::new(callback)));
        id
    }

    /// Remove a callback. Returns false if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut callbacks = self.callbacks.write();
        let before = callbacks.len();
        callbacks.retain(|(existing, _)| *existing != id);
        callbacks.len() != before
    }

    /// Open a channel that receives every subsequent event
    pub fn channel(&self) -> Receiver<SizeCategoryChanged> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.senders.lock().push(tx);
        rx
    }

    /// Number of registered callbacks
    pub fn len(&self) -> usize {
        self.callbacks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.read().is_empty()
    }

    /// Deliver `event` to every subscriber
    ///
    /// The callback list is snapshotted first, so callbacks may subscribe or
    /// unsubscribe while being notified.
    pub fn notify(&self, event: &SizeCategoryChanged) {
        let callbacks: Vec<Callback> = self
            .callbacks
            .read()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();

        tracing::debug!(
            category = %event.category,
            subscribers = callbacks.len(),
            "Notifying size category subscribers"
        );

        for callback in callbacks {
            callback(event);
        }

        // Dropped receivers are pruned here
        self.senders.lock().retain(|tx| tx.send(*event).is_ok());
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("callbacks", &self.len())
            .field("channels", &self.senders.lock().len())
            .finish()
    }
}
