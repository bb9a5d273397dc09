/*!
 * Process Types
 * Default process handle implementation
 */

use super::traits::ProcessHandle;
use crate::core::types::{Priority, ProcessId, RegistryResult};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;
use uuid::Uuid;

/// Default process handle with a random UUID id
#[derive(Debug)]
pub struct Process {
    id: ProcessId,
    priority: Priority,
    terminated: AtomicBool,
}

impl Process {
    pub fn new(priority: Priority) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), priority)
    }

    pub fn with_id(id: impl Into<ProcessId>, priority: Priority) -> Self {
        Self {
            id: id.into(),
            priority,
            terminated: AtomicBool::new(false),
        }
    }

    /// Whether `terminate` has been called on this process
    pub fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::Acquire)
    }
}

impl ProcessHandle for Process {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn terminate(&self) -> RegistryResult<()> {
        if !self.terminated.swap(true, Ordering::AcqRel) {
            info!(id = %self.id, priority = %self.priority, "Killing process");
        }
        Ok(())
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Process id:{} with priority:{}", self.id, self.priority)
    }
}
