/*!
 * Registry Traits
 * Object-safe operation set over a process registry
 */

use super::ordering::SortOrder;
use super::Registry;
use crate::core::types::{Priority, RegistryResult};
use crate::process::traits::ProcessHandle;
use crate::process::view::ReadOnlyView;
use std::sync::Arc;

/// Process registry interface
pub trait ProcessRegistry: Send + Sync {
    /// Add a process
    fn add(&self, handle: Arc<dyn ProcessHandle>) -> RegistryResult<()>;

    /// List processes in the given order
    fn list(&self, order: SortOrder) -> Vec<ReadOnlyView>;

    /// Kill a process by id
    fn kill_by_id(&self, id: &str) -> RegistryResult<()>;

    /// Kill 0 or more processes by priority
    fn kill_by_priority(&self, priority: Priority) -> usize;

    /// Kill all processes
    fn kill_all(&self) -> usize;
}

impl ProcessRegistry for Registry {
    fn add(&self, handle: Arc<dyn ProcessHandle>) -> RegistryResult<()> {
        Registry::add(self, handle)
    }

    fn list(&self, order: SortOrder) -> Vec<ReadOnlyView> {
        Registry::list(self, order)
    }

    fn kill_by_id(&self, id: &str) -> RegistryResult<()> {
        Registry::kill_by_id(self, id)
    }

    fn kill_by_priority(&self, priority: Priority) -> usize {
        Registry::kill_by_priority(self, priority)
    }

    fn kill_all(&self) -> usize {
        Registry::kill_all(self)
    }
}
