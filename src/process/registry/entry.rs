/*!
 * Tracked Entry
 * A process handle paired with the time it entered the registry
 */

use crate::core::types::{Priority, Timestamp};
use crate::process::traits::ProcessHandle;
use std::sync::Arc;

/// Registry storage entry
#[derive(Debug, Clone)]
pub(crate) struct TrackedEntry {
    pub entered_at: Timestamp,
    pub handle: Arc<dyn ProcessHandle>,
}

impl TrackedEntry {
    pub fn new(entered_at: Timestamp, handle: Arc<dyn ProcessHandle>) -> Self {
        Self { entered_at, handle }
    }

    #[inline]
    pub fn id(&self) -> &str {
        self.handle.id()
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.handle.priority()
    }

    /// Whether this entry holds the very same handle allocation
    #[inline]
    pub fn is_handle(&self, other: &Arc<dyn ProcessHandle>) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.handle) as *const (),
            Arc::as_ptr(other) as *const (),
        )
    }

    /// Eviction key: lowest weight first, oldest among equal weights
    #[inline]
    pub fn eviction_key(&self) -> (u32, Timestamp) {
        (self.priority().weight(), self.entered_at)
    }
}
