/*!
 * Process Registry Library
 * Capacity-bounded, thread-safe registry of tracked processes with
 * reject, oldest-out and lowest-priority-out admission policies
 */

pub mod core;
pub mod monitoring;
pub mod process;

// Re-exports
pub use crate::core::{
    Priority, ProcessId, RegistryError, RegistryResult, SequentialClock, SystemClock, TimeSource,
    Timestamp,
};
pub use monitoring::{init_tracing, init_tracing_with, TraceFormat};
pub use process::{
    AdmissionPolicy, Process, ProcessHandle, ProcessRegistry, ReadOnlyView, Registry,
    RegistryBuilder, RegistryConfig, SortOrder,
};
