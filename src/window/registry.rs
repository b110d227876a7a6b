/*!
 * Window Registry
 * Lifecycle and stacking for open application windows
 */

use log::{debug, info};
use parking_lot::RwLock;
use std::sync::Arc;

use super::types::{WindowRecord, WindowSpec};
use crate::core::{AtomicGenerator, WindowId};

/// Registry of open windows
///
/// Records are kept in creation order; stacking order is a separate
/// monotonic counter. Operations on unknown ids are silent no-ops: callers
/// only hold ids handed out by `create`, and a stale id just means that
/// window was already closed. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct WindowManager {
    windows: Arc<RwLock<Vec<WindowRecord>>>,
    ids: AtomicGenerator,
    stacking: AtomicGenerator,
}

impl WindowManager {
    pub fn new() -> Self {
        info!("window registry initialized");
        Self {
            windows: Arc::new(RwLock::new(Vec::new())),
            ids: AtomicGenerator::new(1),
            stacking: AtomicGenerator::new(1),
        }
    }

    /// Open a new window in front of everything else
    pub fn create(&self, spec: WindowSpec) -> WindowId {
        let id = WindowId(self.ids.next());
        debug!("created window {} for app {:?}", id, spec.app);
        self.windows.write().push(WindowRecord {
            id,
            title: spec.title,
            app: spec.app,
            rect: spec.rect,
            minimized: false,
            maximized: false,
            stacking: self.stacking.next(),
        });
        id
    }

    /// Close a window; terminal and idempotent
    pub fn close(&self, id: WindowId) {
        self.windows.write().retain(|window| window.id != id);
        debug!("closed window {}", id);
    }

    /// Hide a window; geometry and stacking order are untouched
    pub fn minimize(&self, id: WindowId) {
        self.update(id, |window| window.minimized = true);
    }

    /// Bring a minimized window back
    pub fn restore(&self, id: WindowId) {
        self.update(id, |window| window.minimized = false);
    }

    /// Toggle between maximized and normal
    pub fn toggle_maximize(&self, id: WindowId) {
        self.update(id, |window| window.maximized = !window.maximized);
    }

    /// Raise a window above everything else
    pub fn focus(&self, id: WindowId) {
        let next = self.stacking.next();
        self.update(id, |window| window.stacking = next);
    }

    /// Reposition a window; boundary clamping is the caller's concern
    pub fn move_to(&self, id: WindowId, x: f64, y: f64) {
        self.update(id, |window| {
            window.rect.x = x;
            window.rect.y = y;
        });
    }

    /// Resize a window; minimum-size policy is the caller's concern
    pub fn resize(&self, id: WindowId, width: f64, height: f64) {
        self.update(id, |window| {
            window.rect.width = width;
            window.rect.height = height;
        });
    }

    /// Snapshot of all windows in creation order
    #[must_use]
    pub fn windows(&self) -> Vec<WindowRecord> {
        self.windows.read().clone()
    }

    /// Snapshot of one window
    #[must_use]
    pub fn get(&self, id: WindowId) -> Option<WindowRecord> {
        self.windows
            .read()
            .iter()
            .find(|window| window.id == id)
            .cloned()
    }

    /// Frontmost window: the one with the highest stacking order
    #[must_use]
    pub fn topmost(&self) -> Option<WindowRecord> {
        self.windows
            .read()
            .iter()
            .max_by_key(|window| window.stacking)
            .cloned()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.windows.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.read().is_empty()
    }

    fn update(&self, id: WindowId, apply: impl FnOnce(&mut WindowRecord)) {
        if let Some(window) = self
            .windows
            .write()
            .iter_mut()
            .find(|window| window.id == id)
        {
            apply(window);
        }
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}
