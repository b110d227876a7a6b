/*!
 * Entry Operations
 * Create, rename, and delete entities
 */

use log::debug;

use super::{attach_child, detach_child, name_taken, VfsManager};
use crate::core::EntityId;
use crate::vfs::observable::VfsEvent;
use crate::vfs::types::{Entity, VfsError, VfsResult};

impl VfsManager {
    /// Create a file; the parent defaults to the current folder
    ///
    /// `content: None` creates an opaque file (no textual content);
    /// `Some("")` an empty one.
    pub fn create_file(
        &self,
        name: &str,
        content: Option<&str>,
        parent: Option<EntityId>,
    ) -> VfsResult<EntityId> {
        Entity::validate_name(name)?;
        let parent = self.target_parent(parent);
        let bytes = content.map_or(0, str::len);
        let id = {
            let mut table = self.entities.write();
            let folder = table
                .get(&parent)
                .ok_or_else(|| VfsError::NotFound(parent.to_string()))?;
            if !folder.is_folder() {
                return Err(VfsError::NotAFolder(folder.name.clone()));
            }
            if name_taken(&table, parent, name, None) {
                return Err(VfsError::AlreadyExists(name.to_string()));
            }
            self.check_capacity(bytes)?;

            let entity = Entity::file(name, parent, content.map(str::to_string))?;
            let id = entity.id;
            table.insert(id, entity);
            attach_child(&mut table, parent, id);
            self.grow_used(bytes);
            id
        };
        debug!("created file {:?} ({})", name, id);
        self.emit(VfsEvent::Created { id });
        Ok(id)
    }

    /// Create an empty folder; the parent defaults to the current folder
    pub fn create_folder(&self, name: &str, parent: Option<EntityId>) -> VfsResult<EntityId> {
        Entity::validate_name(name)?;
        let parent = self.target_parent(parent);
        let id = {
            let mut table = self.entities.write();
            let folder = table
                .get(&parent)
                .ok_or_else(|| VfsError::NotFound(parent.to_string()))?;
            if !folder.is_folder() {
                return Err(VfsError::NotAFolder(folder.name.clone()));
            }
            if name_taken(&table, parent, name, None) {
                return Err(VfsError::AlreadyExists(name.to_string()));
            }

            let entity = Entity::folder(name, parent)?;
            let id = entity.id;
            table.insert(id, entity);
            attach_child(&mut table, parent, id);
            id
        };
        debug!("created folder {:?} ({})", name, id);
        self.emit(VfsEvent::Created { id });
        Ok(id)
    }

    /// Rename an entity, keeping its name unique among its siblings
    pub fn rename(&self, id: EntityId, new_name: &str) -> VfsResult<()> {
        Entity::validate_name(new_name)?;
        {
            let mut table = self.entities.write();
            let entry = table
                .get(&id)
                .ok_or_else(|| VfsError::NotFound(id.to_string()))?;
            let Some(parent) = entry.parent else {
                return Err(VfsError::RootProtected);
            };
            if name_taken(&table, parent, new_name, Some(id)) {
                return Err(VfsError::AlreadyExists(new_name.to_string()));
            }

            if let Some(entry) = table.get_mut(&id) {
                entry.name = new_name.to_string();
                entry.touch();
            }
            if let Some(folder) = table.get_mut(&parent) {
                folder.touch();
            }
        }
        debug!("renamed {} to {:?}", id, new_name);
        self.emit(VfsEvent::Renamed { id });
        Ok(())
    }

    /// Delete an entity and its entire subtree
    ///
    /// Removal is immediate and irreversible; there is no trash tier.
    pub fn delete(&self, id: EntityId) -> VfsResult<()> {
        let mut freed = 0usize;
        let removed;
        {
            let mut table = self.entities.write();
            let entry = table
                .get(&id)
                .ok_or_else(|| VfsError::NotFound(id.to_string()))?;
            let Some(parent) = entry.parent else {
                return Err(VfsError::RootProtected);
            };

            // Breadth-first sweep over the subtree; the map removal order
            // does not matter once every id is collected.
            let mut doomed = vec![id];
            let mut cursor = 0;
            while cursor < doomed.len() {
                if let Some(entry) = table.get(&doomed[cursor]) {
                    doomed.extend_from_slice(entry.children());
                }
                cursor += 1;
            }
            for victim in &doomed {
                if let Some(entry) = table.remove(victim) {
                    if let Some(content) = entry.content() {
                        freed += content.len();
                    }
                }
            }
            detach_child(&mut table, parent, id);
            removed = doomed.len();
        }
        self.shrink_used(freed);
        debug!("deleted {} and {} descendants", id, removed - 1);
        self.emit(VfsEvent::Deleted { id });
        Ok(())
    }
}
