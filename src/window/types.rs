/*!
 * Window Types
 * Geometry and per-window records
 */

use serde::{Deserialize, Serialize};

use crate::core::WindowId;

/// Axis-aligned rectangle in desktop coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Creation request for a new window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub title: String,
    /// Application tag, e.g. "terminal" or "finder"
    pub app: String,
    pub rect: Rect,
}

/// One open window as tracked by the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub app: String,
    pub rect: Rect,
    pub minimized: bool,
    pub maximized: bool,
    /// Stacking order; higher renders in front
    pub stacking: u64,
}
