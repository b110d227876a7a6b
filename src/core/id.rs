/*!
 * ID Generation
 * Type-safe id wrappers and a monotonic counter for windows and stacking
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

// ============================================================================
// Type-Safe ID Wrappers
// ============================================================================

/// Identifier for a filesystem entity
///
/// Random v4 UUIDs rather than wall-clock values: rapid programmatic
/// creation must never hand out colliding ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generate a fresh random id
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for an open window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Atomic Counter Generator
// ============================================================================

/// Monotonic atomic counter
///
/// Backs window ids and the focus/stacking counter. Values are never
/// recycled, so a freshly assigned value is strictly greater than every
/// value handed out before it.
pub struct AtomicGenerator {
    counter: Arc<AtomicU64>,
}

impl AtomicGenerator {
    /// Create new generator starting at the given value
    #[inline]
    pub fn new(start: u64) -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(start)),
        }
    }

    /// Take the next value
    #[inline]
    pub fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }

    /// Current counter value (for debugging)
    #[inline]
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl Clone for AtomicGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: Arc::clone(&self.counter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_sequence() {
        let gen = AtomicGenerator::new(10);

        assert_eq!(gen.next(), 10);
        assert_eq!(gen.next(), 11);
        assert_eq!(gen.next(), 12);
        assert_eq!(gen.current(), 13);
    }

    #[test]
    fn test_clones_share_counter() {
        let gen = AtomicGenerator::new(1);
        let other = gen.clone();

        assert_eq!(gen.next(), 1);
        assert_eq!(other.next(), 2);
        assert_eq!(gen.next(), 3);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut ids: Vec<EntityId> = (0..64).map(|_| EntityId::generate()).collect();
        ids.sort_by_key(|id| id.to_string());
        ids.dedup();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn test_window_id_display() {
        assert_eq!(WindowId(42).to_string(), "42");
    }
}
