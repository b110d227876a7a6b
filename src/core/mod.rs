/*!
 * Core Module
 * Cross-cutting plumbing shared by the filesystem and window subsystems
 */

pub mod id;

pub use id::{AtomicGenerator, EntityId, WindowId};
