/*!
 * Content Operations
 * Read and write textual file content
 */

use log::debug;

use super::VfsManager;
use crate::core::EntityId;
use crate::vfs::observable::VfsEvent;
use crate::vfs::types::{EntityKind, VfsError, VfsResult};

impl VfsManager {
    /// Textual content of a file
    ///
    /// `None` for unknown ids, folders, and files without textual content.
    #[must_use]
    pub fn content(&self, id: EntityId) -> Option<String> {
        self.entities
            .read()
            .get(&id)
            .and_then(|entry| entry.content().map(str::to_string))
    }

    /// Replace a file's content, updating its size and modified time
    pub fn set_content(&self, id: EntityId, content: &str) -> VfsResult<()> {
        {
            let mut table = self.entities.write();
            let entry = table
                .get(&id)
                .ok_or_else(|| VfsError::NotFound(id.to_string()))?;
            if !entry.is_file() {
                return Err(VfsError::NotAFile(entry.name.clone()));
            }
            let parent = entry.parent;
            let old_bytes = entry.content().map_or(0, str::len);
            if content.len() > old_bytes {
                self.check_capacity(content.len() - old_bytes)?;
            }

            if let Some(entry) = table.get_mut(&id) {
                if let EntityKind::File { size, content: slot } = &mut entry.kind {
                    *size = content.len() as u64;
                    *slot = Some(content.to_string());
                }
                entry.touch();
            }
            if let Some(parent) = parent {
                if let Some(folder) = table.get_mut(&parent) {
                    folder.touch();
                }
            }

            if content.len() > old_bytes {
                self.grow_used(content.len() - old_bytes);
            } else {
                self.shrink_used(old_bytes - content.len());
            }
        }
        debug!("updated content of {} ({} bytes)", id, content.len());
        self.emit(VfsEvent::ContentChanged { id });
        Ok(())
    }
}
