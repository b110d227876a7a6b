/*!
 * Filesystem Store
 * Entity table, path-stack navigator, and clipboard engine
 */

mod clipboard_ops;
mod content_ops;
mod entry_ops;
mod nav_ops;
mod query_ops;
mod seed;

use ahash::RandomState;
use log::info;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::observable::{EventBus, SubscriptionId, VfsEvent};
use super::types::{ClipboardPayload, Entity, VfsError, VfsResult};
use crate::core::EntityId;

pub(crate) type EntityTable = HashMap<EntityId, Entity, RandomState>;

/// Serializable snapshot of the full filesystem state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VfsState {
    pub entities: HashMap<EntityId, Entity, RandomState>,
    pub path: Vec<EntityId>,
    pub clipboard: Option<ClipboardPayload>,
}

/// Virtual filesystem manager
///
/// Owns the entity table, the path stack (current navigation position), the
/// clipboard, and the change-notification bus. Cheap to clone; all clones
/// share the same underlying state. Mutations are serialized by construction
/// (a single logical UI thread drives them) and every mutating operation
/// notifies subscribers synchronously after its state change settles.
#[derive(Clone)]
pub struct VfsManager {
    entities: Arc<RwLock<EntityTable>>,
    path: Arc<RwLock<Vec<EntityId>>>,
    clipboard: Arc<RwLock<Option<ClipboardPayload>>>,
    bus: EventBus,
    root: EntityId,
    /// Creation/paste target while the path stack is empty
    default_parent: EntityId,
    max_bytes: Option<usize>,
    used_bytes: Arc<AtomicUsize>,
}

impl VfsManager {
    /// Create a filesystem holding only the synthetic root
    pub fn new() -> Self {
        let root = Entity::root();
        let root_id = root.id;
        let mut entities = EntityTable::default();
        entities.insert(root_id, root);

        info!("filesystem initialized");
        Self {
            entities: Arc::new(RwLock::new(entities)),
            path: Arc::new(RwLock::new(Vec::new())),
            clipboard: Arc::new(RwLock::new(None)),
            bus: EventBus::new(),
            root: root_id,
            default_parent: root_id,
            max_bytes: None,
            used_bytes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create with a limit on total stored content bytes
    pub fn with_capacity(max_bytes: usize) -> Self {
        let mut fs = Self::new();
        fs.max_bytes = Some(max_bytes);
        fs
    }

    /// Id of the synthetic root folder
    #[must_use]
    pub fn root_id(&self) -> EntityId {
        self.root
    }

    /// Register a change listener; fired synchronously after every mutation
    pub fn subscribe(
        &self,
        listener: impl Fn(&VfsEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.bus.subscribe(listener)
    }

    /// Drop a change listener
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub(super) fn emit(&self, event: VfsEvent) {
        self.bus.emit(&event);
    }

    /// Resolve the folder a create/paste targets: explicit parent, else
    /// top-of-stack, else the default target
    pub(super) fn target_parent(&self, explicit: Option<EntityId>) -> EntityId {
        explicit.unwrap_or_else(|| {
            self.path
                .read()
                .last()
                .copied()
                .unwrap_or(self.default_parent)
        })
    }

    pub(super) fn check_capacity(&self, additional: usize) -> VfsResult<()> {
        if let Some(max) = self.max_bytes {
            if self.used_bytes.load(Ordering::SeqCst) + additional > max {
                return Err(VfsError::OutOfSpace);
            }
        }
        Ok(())
    }

    pub(super) fn grow_used(&self, bytes: usize) {
        self.used_bytes.fetch_add(bytes, Ordering::SeqCst);
    }

    pub(super) fn shrink_used(&self, bytes: usize) {
        self.used_bytes.fetch_sub(bytes, Ordering::SeqCst);
    }
}

impl Default for VfsManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Append `child` to `parent`'s child list and bump its modified time
pub(super) fn attach_child(table: &mut EntityTable, parent: EntityId, child: EntityId) {
    if let Some(entry) = table.get_mut(&parent) {
        if let Some(children) = entry.children_mut() {
            children.push(child);
        }
        entry.touch();
    }
}

/// Remove `child` from `parent`'s child list and bump its modified time
pub(super) fn detach_child(table: &mut EntityTable, parent: EntityId, child: EntityId) {
    if let Some(entry) = table.get_mut(&parent) {
        if let Some(children) = entry.children_mut() {
            children.retain(|id| *id != child);
        }
        entry.touch();
    }
}

/// Whether a sibling of `exclude` under `parent` already uses `name`
pub(super) fn name_taken(
    table: &EntityTable,
    parent: EntityId,
    name: &str,
    exclude: Option<EntityId>,
) -> bool {
    let Some(folder) = table.get(&parent) else {
        return false;
    };
    folder.children().iter().any(|child| {
        Some(*child) != exclude && table.get(child).is_some_and(|entry| entry.name == name)
    })
}

/// Whether `node` lies inside the subtree rooted at `ancestor`
pub(super) fn is_descendant(table: &EntityTable, ancestor: EntityId, node: EntityId) -> bool {
    let mut cursor = table.get(&node).and_then(|entry| entry.parent);
    while let Some(parent) = cursor {
        if parent == ancestor {
            return true;
        }
        cursor = table.get(&parent).and_then(|entry| entry.parent);
    }
    false
}
