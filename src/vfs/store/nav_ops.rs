/*!
 * Navigation Operations
 * Path-stack descent and ascent
 */

use log::debug;

use super::VfsManager;
use crate::core::EntityId;
use crate::vfs::observable::VfsEvent;
use crate::vfs::types::{Entity, VfsError, VfsResult};

impl VfsManager {
    /// Entities in the current folder, in stored order
    ///
    /// An unresolvable top-of-stack yields an empty listing rather than an
    /// error; a viewer pointed at a just-deleted folder simply shows nothing.
    #[must_use]
    pub fn list_current(&self) -> Vec<Entity> {
        let table = self.entities.read();
        let folder = self.path.read().last().copied().unwrap_or(self.root);
        let Some(entry) = table.get(&folder) else {
            return Vec::new();
        };
        entry
            .children()
            .iter()
            .filter_map(|id| table.get(id).cloned())
            .collect()
    }

    /// Snapshot of the path stack, root-most first; empty means "at root"
    #[must_use]
    pub fn current_path(&self) -> Vec<EntityId> {
        self.path.read().clone()
    }

    /// Enter a folder
    ///
    /// A target that is not a child of the current folder replaces the whole
    /// stack instead of pushing onto it: the sidebar and search results jump
    /// across the tree this way, and the stack must stay a real ancestor
    /// chain from the root down to the current folder.
    pub fn descend(&self, folder: EntityId) -> VfsResult<()> {
        {
            let table = self.entities.read();
            let entry = table
                .get(&folder)
                .ok_or_else(|| VfsError::NotFound(folder.to_string()))?;
            if !entry.is_folder() {
                return Err(VfsError::NotAFolder(entry.name.clone()));
            }

            let mut path = self.path.write();
            match path.last().copied() {
                Some(top) if entry.parent == Some(top) => path.push(folder),
                Some(_) => *path = vec![folder],
                None => path.push(folder),
            }
        }
        debug!("descended into {}", folder);
        self.emit(VfsEvent::NavigationChanged);
        Ok(())
    }

    /// Move one level up; fails when already at the root
    pub fn ascend(&self) -> VfsResult<()> {
        if self.path.write().pop().is_none() {
            return Err(VfsError::AtRoot);
        }
        self.emit(VfsEvent::NavigationChanged);
        Ok(())
    }
}
