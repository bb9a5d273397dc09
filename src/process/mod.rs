/*!
 * Process Module
 * Process handles and the capacity-bounded registry that tracks them
 */

pub mod registry;
pub mod traits;
pub mod types;
pub mod view;

// Re-export for convenience
pub use registry::{
    AdmissionPolicy, ProcessRegistry, Registry, RegistryBuilder, RegistryConfig, SortOrder,
};
pub use traits::ProcessHandle;
pub use types::Process;
pub use view::ReadOnlyView;
