/*!
 * Process Registry
 * Capacity-bounded set of tracked processes with pluggable admission
 */

use crate::core::clock::{SystemClock, TimeSource};
use crate::core::types::RegistryResult;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use tracing::info;

mod builder;
mod config;
mod entry;
mod operations;
mod ordering;
mod policy;
mod traits;

use entry::TrackedEntry;

pub use builder::RegistryBuilder;
pub use config::RegistryConfig;
pub use ordering::SortOrder;
pub use policy::AdmissionPolicy;
pub use traits::ProcessRegistry;

/// Process registry
///
/// A single reader/writer lock guards the entries: `add` and every `kill_*`
/// take it exclusively for the whole check-evict-insert-terminate sequence,
/// `list` and the accessors take it shared. Entries are kept in arrival order.
pub struct Registry {
    capacity: usize,
    policy: AdmissionPolicy,
    unique_ids: bool,
    entries: RwLock<VecDeque<TrackedEntry>>,
    clock: Arc<dyn TimeSource>,
}

impl Registry {
    /// Registry that rejects adds once full
    pub fn new(capacity: usize) -> RegistryResult<Self> {
        Self::from_config(RegistryConfig::new(capacity, AdmissionPolicy::Reject))
    }

    /// Registry that evicts the oldest process once full
    pub fn fifo(capacity: usize) -> RegistryResult<Self> {
        Self::from_config(RegistryConfig::new(capacity, AdmissionPolicy::OldestOut))
    }

    /// Registry that evicts the lowest-priority, oldest process once full
    pub fn priority(capacity: usize) -> RegistryResult<Self> {
        Self::from_config(RegistryConfig::new(
            capacity,
            AdmissionPolicy::LowestPriorityOut,
        ))
    }

    /// Registry with an injected time source
    pub fn with_clock(
        capacity: usize,
        policy: AdmissionPolicy,
        clock: Arc<dyn TimeSource>,
    ) -> RegistryResult<Self> {
        Self::builder()
            .with_capacity(capacity)
            .with_policy(policy)
            .with_clock(clock)
            .build()
    }

    /// Registry from a configuration, using the wall clock
    pub fn from_config(config: RegistryConfig) -> RegistryResult<Self> {
        Self::from_parts(config, Arc::new(SystemClock))
    }

    /// Create a new registry builder
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub(crate) fn from_parts(
        config: RegistryConfig,
        clock: Arc<dyn TimeSource>,
    ) -> RegistryResult<Self> {
        config.validate()?;

        info!(
            capacity = config.capacity,
            policy = %config.policy,
            unique_ids = config.unique_ids,
            "Registry initialized"
        );

        Ok(Self {
            capacity: config.capacity,
            policy: config.policy,
            unique_ids: config.unique_ids,
            entries: RwLock::new(VecDeque::with_capacity(config.capacity)),
            clock,
        })
    }

    /// Maximum number of tracked processes
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Admission policy applied when full
    pub fn policy(&self) -> AdmissionPolicy {
        self.policy
    }

    /// Number of tracked processes
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Whether a process with this id is tracked
    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().iter().any(|e| e.id() == id)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .field("unique_ids", &self.unique_ids)
            .field("len", &self.len())
            .finish()
    }
}
