/*!
 * Change Notification Bus
 * Synchronous observer registry for filesystem mutations
 */

use ahash::RandomState;
use dashmap::DashMap;
use log::trace;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::EntityId;

/// Event emitted after a mutation has fully settled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum VfsEvent {
    Created {
        id: EntityId,
    },
    Renamed {
        id: EntityId,
    },
    ContentChanged {
        id: EntityId,
    },
    /// The entity and its entire subtree are gone
    Deleted {
        id: EntityId,
    },
    Moved {
        id: EntityId,
        from: EntityId,
        to: EntityId,
    },
    NavigationChanged,
    ClipboardChanged,
}

/// Handle returned by subscribe; pass back to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(&VfsEvent) + Send + Sync>;

/// Synchronous broadcast to registered listeners
///
/// Emission completes before the mutating call returns, so a listener always
/// observes fully settled post-mutation state, never a torn intermediate.
#[derive(Clone)]
pub struct EventBus {
    listeners: Arc<DashMap<u64, Listener, RandomState>>,
    next_id: Arc<AtomicU64>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(DashMap::with_hasher(RandomState::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Register a listener for all future events
    pub fn subscribe(&self, listener: impl Fn(&VfsEvent) + Send + Sync + 'static) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.insert(id, Arc::new(listener));
        trace!("listener {} subscribed", id);
        SubscriptionId(id)
    }

    /// Drop a listener; returns false if it was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id.0).is_some()
    }

    /// Deliver an event to every listener, synchronously
    pub fn emit(&self, event: &VfsEvent) {
        // Snapshot before invoking so a listener can re-enter
        // subscribe/unsubscribe without holding up the registry.
        let snapshot: Vec<Listener> = self
            .listeners
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        trace!("emitting {:?} to {} listeners", event, snapshot.len());
        for listener in snapshot {
            listener(event);
        }
    }

    /// Number of active listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
