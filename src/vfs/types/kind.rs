/*!
 * Entity Kind
 * File or folder payload carried by each entity
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::EntityId;

/// Kind-specific payload of a filesystem entity
///
/// A file's `content` distinguishes absence from emptiness: `None` means no
/// viewer should assume textual content exists, `Some("")` is an empty file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EntityKind {
    File {
        size: u64,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        content: Option<String>,
    },
    Folder {
        children: Vec<EntityId>,
    },
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::File { .. } => write!(f, "file"),
            EntityKind::Folder { .. } => write!(f, "folder"),
        }
    }
}
