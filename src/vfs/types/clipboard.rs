/*!
 * Clipboard Types
 * The single staged copy/cut payload awaiting paste
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::EntityId;

/// How a staged payload is consumed by paste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipboardOp {
    /// Paste duplicates; the payload survives repeated pastes
    Copy,
    /// Paste moves; the payload is cleared afterward
    Cut,
}

impl fmt::Display for ClipboardOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardOp::Copy => write!(f, "copy"),
            ClipboardOp::Cut => write!(f, "cut"),
        }
    }
}

/// Staged clipboard payload; any copy/cut call replaces it wholesale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardPayload {
    pub items: Vec<EntityId>,
    pub op: ClipboardOp,
}

impl ClipboardPayload {
    pub fn copy(items: Vec<EntityId>) -> Self {
        Self {
            items,
            op: ClipboardOp::Copy,
        }
    }

    pub fn cut(items: Vec<EntityId>) -> Self {
        Self {
            items,
            op: ClipboardOp::Cut,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
