/*!
 * VFS Error Types
 * Expected failure conditions for filesystem operations
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// VFS operation result
#[must_use = "filesystem operations can fail and must be handled"]
pub type VfsResult<T> = Result<T, VfsError>;

/// Expected filesystem failures
///
/// Every variant is a caller-visible condition, not a crash. Serialization
/// uses the tagged enum pattern so the presentation layer can match on the
/// `error` field.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum VfsError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("not a folder: {0}")]
    NotAFolder(String),

    #[error("not a file: {0}")]
    NotAFile(String),

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("clipboard is empty")]
    EmptyClipboard,

    #[error("already at the root folder")]
    AtRoot,

    #[error("the root folder cannot be renamed, moved, or deleted")]
    RootProtected,

    #[error("out of space")]
    OutOfSpace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = VfsError::NotFound("notes.txt".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"error":"not_found","details":"notes.txt"}"#);

        let deserialized: VfsError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, deserialized);
    }

    #[test]
    fn test_unit_variant_serialization() {
        let json = serde_json::to_string(&VfsError::EmptyClipboard).unwrap();
        assert_eq!(json, r#"{"error":"empty_clipboard"}"#);
    }
}
