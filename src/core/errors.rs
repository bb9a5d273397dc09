/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::ProcessId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registry errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum RegistryError {
    #[error("Invalid registry configuration: {0}")]
    #[diagnostic(
        code(registry::invalid_configuration),
        help("Capacity must be a positive integer.")
    )]
    InvalidConfiguration(String),

    #[error("Maximum capacity reached. Maximum capacity is {capacity}")]
    #[diagnostic(
        code(registry::capacity_exceeded),
        help("Kill unused processes, retry later, or use an evicting admission policy.")
    )]
    CapacityExceeded { capacity: usize },

    #[error("Process {0} not found")]
    #[diagnostic(
        code(registry::not_found),
        help("The process may have been killed or evicted. Check the id is still listed.")
    )]
    NotFound(ProcessId),

    #[error("Unsupported operation: {0}")]
    #[diagnostic(
        code(registry::unsupported_operation),
        help("Listed processes are read-only. Kill through the registry instead.")
    )]
    UnsupportedOperation(String),

    #[error("Process {0} is already tracked")]
    #[diagnostic(
        code(registry::duplicate_id),
        help("Process ids must be unique while tracked, or disable unique_ids.")
    )]
    DuplicateId(ProcessId),

    #[error("Failed to terminate process {id}: {reason}")]
    #[diagnostic(code(registry::termination_failed))]
    TerminationFailed { id: ProcessId, reason: String },
}

impl RegistryError {
    /// Whether the caller may reasonably retry the same operation later
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RegistryError::CapacityExceeded { .. }
                | RegistryError::NotFound(_)
                | RegistryError::DuplicateId(_)
        )
    }
}
