/*!
 * Window Registry Module
 * Window records, stacking order, and layout policy helpers
 */

pub mod layout;
pub mod registry;
pub mod types;

// Re-exports
pub use crate::core::WindowId;
pub use registry::WindowManager;
pub use types::{Rect, WindowRecord, WindowSpec};
