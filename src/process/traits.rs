/*!
 * Process Traits
 * Contract between the registry and the processes it tracks
 */

use crate::core::types::{Priority, RegistryResult};
use std::fmt::Debug;

/// A trackable process handle
///
/// The registry only ever calls these three methods. `id()` and `priority()`
/// must stay stable while the handle is tracked; `terminate()` is called at
/// most once by the registry, when the handle is killed or evicted.
pub trait ProcessHandle: Send + Sync + Debug {
    /// Unique id of the process
    fn id(&self) -> &str;

    /// Priority of the process
    fn priority(&self) -> Priority;

    /// Terminate the process
    fn terminate(&self) -> RegistryResult<()>;
}
