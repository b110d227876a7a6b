/*!
 * Clipboard Operations
 * Copy, cut, and paste over entity ids
 */

use log::{debug, warn};
use std::time::SystemTime;

use super::{attach_child, detach_child, is_descendant, name_taken, EntityTable, VfsManager};
use crate::core::EntityId;
use crate::vfs::observable::VfsEvent;
use crate::vfs::types::{ClipboardOp, ClipboardPayload, Entity, EntityKind, VfsError, VfsResult};

impl VfsManager {
    /// Stage entities for duplication; replaces any staged payload
    pub fn copy(&self, items: &[EntityId]) {
        *self.clipboard.write() = Some(ClipboardPayload::copy(items.to_vec()));
        debug!("staged {} items for copy", items.len());
        self.emit(VfsEvent::ClipboardChanged);
    }

    /// Stage entities for a move; replaces any staged payload
    pub fn cut(&self, items: &[EntityId]) {
        *self.clipboard.write() = Some(ClipboardPayload::cut(items.to_vec()));
        debug!("staged {} items for cut", items.len());
        self.emit(VfsEvent::ClipboardChanged);
    }

    /// Snapshot of the staged payload, if any
    #[must_use]
    pub fn clipboard(&self) -> Option<ClipboardPayload> {
        self.clipboard.read().clone()
    }

    /// Paste the staged payload into the current folder
    ///
    /// A cut payload moves the items (ids preserved) and is cleared; a copy
    /// payload deep-duplicates each item's subtree under fresh ids and stays
    /// staged for repeated pastes. Items that cannot be applied (unknown id,
    /// the root, a move into the item's own subtree, a name collision on
    /// move) are skipped, not fatal. Returns the top-level ids that landed
    /// in the target folder.
    pub fn paste(&self) -> VfsResult<Vec<EntityId>> {
        let Some(payload) = self.clipboard.read().clone() else {
            return Err(VfsError::EmptyClipboard);
        };
        if payload.is_empty() {
            return Err(VfsError::EmptyClipboard);
        }

        let target = self.target_parent(None);
        let mut pasted = Vec::new();
        let mut events = Vec::new();
        {
            let mut table = self.entities.write();
            let dest = table
                .get(&target)
                .ok_or_else(|| VfsError::NotFound(target.to_string()))?;
            if !dest.is_folder() {
                return Err(VfsError::NotAFolder(dest.name.clone()));
            }

            for &item in &payload.items {
                match payload.op {
                    ClipboardOp::Cut => match move_entity(&mut table, item, target) {
                        Ok(from) => {
                            pasted.push(item);
                            events.push(VfsEvent::Moved {
                                id: item,
                                from,
                                to: target,
                            });
                        }
                        Err(reason) => warn!("skipping move of {}: {}", item, reason),
                    },
                    ClipboardOp::Copy => {
                        let Some(source) = table.get(&item) else {
                            warn!("skipping copy of {}: no longer exists", item);
                            continue;
                        };
                        let name = free_name(&table, target, &source.name);
                        let bytes = subtree_bytes(&table, item);
                        if self.check_capacity(bytes).is_err() {
                            warn!("skipping copy of {}: out of space", item);
                            continue;
                        }
                        if let Some(clone) = clone_subtree(&mut table, item, target, name) {
                            attach_child(&mut table, target, clone);
                            self.grow_used(bytes);
                            pasted.push(clone);
                            events.push(VfsEvent::Created { id: clone });
                        }
                    }
                }
            }
        }

        // A consumed cut payload also counts as a clipboard change.
        if payload.op == ClipboardOp::Cut {
            *self.clipboard.write() = None;
            events.push(VfsEvent::ClipboardChanged);
        }
        debug!("pasted {} items into {}", pasted.len(), target);
        for event in events {
            self.emit(event);
        }
        Ok(pasted)
    }
}

/// Re-parent `item` into `target`; returns the old parent id
fn move_entity(
    table: &mut EntityTable,
    item: EntityId,
    target: EntityId,
) -> Result<EntityId, String> {
    let Some(entry) = table.get(&item) else {
        return Err("no longer exists".to_string());
    };
    let Some(from) = entry.parent else {
        return Err("the root folder cannot move".to_string());
    };
    if item == target || is_descendant(table, item, target) {
        return Err("target folder is inside the moved subtree".to_string());
    }
    if name_taken(table, target, &entry.name, Some(item)) {
        return Err(format!("name {:?} already taken in target", entry.name));
    }

    detach_child(table, from, item);
    attach_child(table, target, item);
    if let Some(entry) = table.get_mut(&item) {
        entry.parent = Some(target);
        entry.touch();
    }
    Ok(from)
}

/// Deep-clone the subtree rooted at `source` under `parent`, fresh ids
/// throughout; the caller attaches the returned id to `parent`'s child list
fn clone_subtree(
    table: &mut EntityTable,
    source: EntityId,
    parent: EntityId,
    name: String,
) -> Option<EntityId> {
    let template = table.get(&source)?.clone();
    let now = SystemTime::now();
    let id = EntityId::generate();
    let kind = match &template.kind {
        EntityKind::File { size, content } => EntityKind::File {
            size: *size,
            content: content.clone(),
        },
        EntityKind::Folder { .. } => EntityKind::Folder {
            children: Vec::new(),
        },
    };
    table.insert(
        id,
        Entity {
            id,
            name,
            parent: Some(parent),
            created: now,
            modified: now,
            kind,
        },
    );

    for &child in template.children() {
        let Some(child_name) = table.get(&child).map(|entry| entry.name.clone()) else {
            continue;
        };
        if let Some(child_clone) = clone_subtree(table, child, id, child_name) {
            if let Some(folder) = table.get_mut(&id) {
                if let Some(children) = folder.children_mut() {
                    children.push(child_clone);
                }
            }
        }
    }
    Some(id)
}

/// Total content bytes in the subtree rooted at `id`
fn subtree_bytes(table: &EntityTable, id: EntityId) -> usize {
    let mut total = 0;
    let mut pending = vec![id];
    while let Some(current) = pending.pop() {
        if let Some(entry) = table.get(&current) {
            if let Some(content) = entry.content() {
                total += content.len();
            }
            pending.extend_from_slice(entry.children());
        }
    }
    total
}

/// `name` if free under `parent`, else the first available ` copy` variant
fn free_name(table: &EntityTable, parent: EntityId, name: &str) -> String {
    if !name_taken(table, parent, name, None) {
        return name.to_string();
    }
    let base = format!("{name} copy");
    if !name_taken(table, parent, &base, None) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base} {n}");
        if !name_taken(table, parent, &candidate, None) {
            return candidate;
        }
        n += 1;
    }
}
