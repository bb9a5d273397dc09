/*!
 * Read-Only Process View
 * Listing-time wrapper that refuses termination
 */

use super::traits::ProcessHandle;
use crate::core::errors::RegistryError;
use crate::core::types::{Priority, RegistryResult};
use std::fmt;
use std::sync::Arc;

/// Read-only view over a tracked process
///
/// Returned by `list`. Terminating through a view would leave a dead process
/// inside the registry, so `terminate` always fails; kill through the registry.
#[derive(Clone)]
pub struct ReadOnlyView {
    handle: Arc<dyn ProcessHandle>,
}

impl ReadOnlyView {
    pub(crate) fn new(handle: Arc<dyn ProcessHandle>) -> Self {
        Self { handle }
    }
}

impl ProcessHandle for ReadOnlyView {
    fn id(&self) -> &str {
        self.handle.id()
    }

    fn priority(&self) -> Priority {
        self.handle.priority()
    }

    fn terminate(&self) -> RegistryResult<()> {
        Err(RegistryError::UnsupportedOperation(format!(
            "terminate on read-only view of process {}",
            self.handle.id()
        )))
    }
}

impl fmt::Debug for ReadOnlyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadOnlyView")
            .field("id", &self.handle.id())
            .field("priority", &self.handle.priority())
            .finish()
    }
}
