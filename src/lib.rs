/*!
 * Webdesk Core Library
 * State core for the browser desktop shell: virtual file system and window registry
 */

pub mod core;
pub mod vfs;
pub mod window;

// Re-exports
pub use self::core::{EntityId, WindowId};
pub use vfs::{
    ClipboardOp, ClipboardPayload, Entity, EntityKind, EventBus, SubscriptionId, VfsError,
    VfsEvent, VfsManager, VfsResult, VfsState,
};
pub use window::{Rect, WindowManager, WindowRecord, WindowSpec};
