/*!
 * Default Layout
 * Seeds the home tree a fresh desktop session starts with
 */

use std::time::SystemTime;

use super::{attach_child, EntityTable, VfsManager};
use crate::core::EntityId;
use crate::vfs::types::{Entity, EntityKind};

const WELCOME_TEXT: &str = "Welcome to your desktop.\n\n\
You can create files and folders, organize your work, and browse your\n\
applications. Files live entirely in this session; nothing is written\n\
to disk.\n";

const NOTES_TEXT: &str = "Team sync\n\n\
Agenda:\n\
1. Quarterly goals\n\
2. Project timeline\n\
3. Budget review\n\n\
Action items:\n\
- Finalize the proposal\n\
- Schedule a follow-up\n";

impl VfsManager {
    /// Create a filesystem pre-populated with the standard home tree:
    /// Desktop, Documents, Downloads, and Applications under the root, a few
    /// starter files inside them, and Desktop as the fallback target for
    /// creation while the path stack is empty.
    pub fn with_default_layout() -> Self {
        let mut fs = Self::new();
        let desktop;
        let mut seeded = 0usize;
        {
            let mut table = fs.entities.write();

            desktop = seed_folder(&mut table, fs.root, "Desktop");
            let documents = seed_folder(&mut table, fs.root, "Documents");
            let downloads = seed_folder(&mut table, fs.root, "Downloads");
            seed_folder(&mut table, fs.root, "Applications");

            seeded += seed_file(&mut table, desktop, "Welcome.txt", Some(WELCOME_TEXT), None);
            seeded += seed_file(&mut table, desktop, "screenshot.png", None, Some(2_048_576));

            seeded += seed_file(
                &mut table,
                documents,
                "Meeting Notes.txt",
                Some(NOTES_TEXT),
                None,
            );
            seed_folder(&mut table, documents, "Projects");

            seeded += seed_file(&mut table, downloads, "wallpaper.jpg", None, Some(3_565_158));
        }
        fs.grow_used(seeded);
        fs.default_parent = desktop;
        fs
    }
}

fn seed_folder(table: &mut EntityTable, parent: EntityId, name: &str) -> EntityId {
    let now = SystemTime::now();
    let id = EntityId::generate();
    table.insert(
        id,
        Entity {
            id,
            name: name.to_string(),
            parent: Some(parent),
            created: now,
            modified: now,
            kind: EntityKind::Folder {
                children: Vec::new(),
            },
        },
    );
    attach_child(table, parent, id);
    id
}

/// Insert a starter file; returns the content bytes it accounts for
fn seed_file(
    table: &mut EntityTable,
    parent: EntityId,
    name: &str,
    content: Option<&str>,
    size: Option<u64>,
) -> usize {
    let now = SystemTime::now();
    let id = EntityId::generate();
    let bytes = content.map_or(0, str::len);
    table.insert(
        id,
        Entity {
            id,
            name: name.to_string(),
            parent: Some(parent),
            created: now,
            modified: now,
            kind: EntityKind::File {
                size: size.unwrap_or(bytes as u64),
                content: content.map(str::to_string),
            },
        },
    );
    attach_child(table, parent, id);
    bytes
}
