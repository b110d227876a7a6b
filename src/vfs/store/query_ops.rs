/*!
 * Query Operations
 * Lookups, search, and state snapshots
 */

use super::{VfsManager, VfsState};
use crate::core::EntityId;
use crate::vfs::types::{Entity, VfsError, VfsResult};

impl VfsManager {
    /// Snapshot of a single entity
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<Entity> {
        self.entities.read().get(&id).cloned()
    }

    /// Children of an arbitrary folder, in stored order
    pub fn list_folder(&self, id: EntityId) -> VfsResult<Vec<Entity>> {
        let table = self.entities.read();
        let entry = table
            .get(&id)
            .ok_or_else(|| VfsError::NotFound(id.to_string()))?;
        if !entry.is_folder() {
            return Err(VfsError::NotAFolder(entry.name.clone()));
        }
        Ok(entry
            .children()
            .iter()
            .filter_map(|child| table.get(child).cloned())
            .collect())
    }

    /// Case-insensitive substring search over all entity names
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Entity> {
        let needle = query.to_lowercase();
        self.entities
            .read()
            .values()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Number of entities in the store, the synthetic root included
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.read().len()
    }

    /// Bytes of file content currently stored
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.used_bytes.load(std::sync::atomic::Ordering::SeqCst)
    }

    /// Configured capacity limit, if any
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.max_bytes
    }

    /// Full serializable snapshot of entities, path, and clipboard
    #[must_use]
    pub fn state(&self) -> VfsState {
        VfsState {
            entities: self.entities.read().clone(),
            path: self.path.read().clone(),
            clipboard: self.clipboard.read().clone(),
        }
    }
}
