/*!
 * Filesystem Entity
 * A single file or folder node in the virtual tree
 */

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use super::errors::{VfsError, VfsResult};
use super::kind::EntityKind;
use crate::core::EntityId;

/// One node of the virtual filesystem
///
/// Every entity except the synthetic root has exactly one parent and appears
/// exactly once in that parent's child list. Child lists keep insertion
/// order; the store never sorts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub parent: Option<EntityId>,
    pub created: SystemTime,
    pub modified: SystemTime,
    #[serde(flatten)]
    pub kind: EntityKind,
}

impl Entity {
    /// Create a file entity with validated name
    #[must_use = "validation result must be checked"]
    pub fn file(
        name: impl Into<String>,
        parent: EntityId,
        content: Option<String>,
    ) -> VfsResult<Self> {
        let name = name.into();
        Self::validate_name(&name)?;
        let size = content.as_deref().map_or(0, |c| c.len() as u64);
        let now = SystemTime::now();
        Ok(Self {
            id: EntityId::generate(),
            name,
            parent: Some(parent),
            created: now,
            modified: now,
            kind: EntityKind::File { size, content },
        })
    }

    /// Create an empty folder entity with validated name
    #[must_use = "validation result must be checked"]
    pub fn folder(name: impl Into<String>, parent: EntityId) -> VfsResult<Self> {
        let name = name.into();
        Self::validate_name(&name)?;
        let now = SystemTime::now();
        Ok(Self {
            id: EntityId::generate(),
            name,
            parent: Some(parent),
            created: now,
            modified: now,
            kind: EntityKind::Folder {
                children: Vec::new(),
            },
        })
    }

    /// The synthetic root folder; bypasses name validation
    pub(crate) fn root() -> Self {
        let now = SystemTime::now();
        Self {
            id: EntityId::generate(),
            name: "/".to_string(),
            parent: None,
            created: now,
            modified: now,
            kind: EntityKind::Folder {
                children: Vec::new(),
            },
        }
    }

    #[inline]
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self.kind, EntityKind::File { .. })
    }

    #[inline]
    #[must_use]
    pub fn is_folder(&self) -> bool {
        matches!(self.kind, EntityKind::Folder { .. })
    }

    /// Child ids in display order; empty for files
    #[must_use]
    pub fn children(&self) -> &[EntityId] {
        match &self.kind {
            EntityKind::Folder { children } => children,
            EntityKind::File { .. } => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<EntityId>> {
        match &mut self.kind {
            EntityKind::Folder { children } => Some(children),
            EntityKind::File { .. } => None,
        }
    }

    /// Byte size; defined for files only
    #[must_use]
    pub fn size(&self) -> Option<u64> {
        match &self.kind {
            EntityKind::File { size, .. } => Some(*size),
            EntityKind::Folder { .. } => None,
        }
    }

    /// Textual content, if this is a file that has any
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::File { content, .. } => content.as_deref(),
            EntityKind::Folder { .. } => None,
        }
    }

    /// Bump the modification timestamp
    pub(crate) fn touch(&mut self) {
        self.modified = SystemTime::now();
    }

    /// Validate an entity name
    #[must_use = "validation result must be checked"]
    pub fn validate_name(name: &str) -> VfsResult<()> {
        if name.is_empty() {
            return Err(VfsError::InvalidName("name cannot be empty".into()));
        }
        if name.contains('\0') {
            return Err(VfsError::InvalidName(
                "name cannot contain null bytes".into(),
            ));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(VfsError::InvalidName(
                "name cannot contain path separators".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_helpers() {
        let parent = EntityId::generate();
        let file = Entity::file("notes.txt", parent, Some("hi".to_string())).unwrap();

        assert!(file.is_file());
        assert!(!file.is_folder());
        assert_eq!(file.size(), Some(2));
        assert_eq!(file.content(), Some("hi"));
        assert!(file.children().is_empty());
        assert_eq!(file.parent, Some(parent));
    }

    #[test]
    fn test_folder_helpers() {
        let folder = Entity::folder("Projects", EntityId::generate()).unwrap();

        assert!(folder.is_folder());
        assert_eq!(folder.size(), None);
        assert_eq!(folder.content(), None);
        assert!(folder.children().is_empty());
    }

    #[test]
    fn test_content_absence_vs_empty() {
        let parent = EntityId::generate();

        let opaque = Entity::file("photo.jpg", parent, None).unwrap();
        assert_eq!(opaque.content(), None);
        assert_eq!(opaque.size(), Some(0));

        let empty = Entity::file("empty.txt", parent, Some(String::new())).unwrap();
        assert_eq!(empty.content(), Some(""));
    }

    #[test]
    fn test_name_validation() {
        assert!(Entity::validate_name("report.pdf").is_ok());
        assert!(Entity::validate_name("my folder").is_ok());

        assert!(Entity::validate_name("").is_err());
        assert!(Entity::validate_name("a/b").is_err());
        assert!(Entity::validate_name("a\\b").is_err());
        assert!(Entity::validate_name("a\0b").is_err());
    }

    #[test]
    fn test_entity_serialization() {
        let file = Entity::file("notes.txt", EntityId::generate(), Some("hi".to_string())).unwrap();
        let json = serde_json::to_string(&file).unwrap();
        assert!(json.contains(r#""kind":"file""#));

        let deserialized: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(file, deserialized);
    }
}
