/*!
 * Registry Builder
 * Builder pattern for Registry construction
 */

use super::config::RegistryConfig;
use super::policy::AdmissionPolicy;
use super::Registry;
use crate::core::clock::{SystemClock, TimeSource};
use crate::core::types::RegistryResult;
use std::sync::Arc;

/// Builder for Registry
pub struct RegistryBuilder {
    config: RegistryConfig,
    clock: Option<Arc<dyn TimeSource>>,
}

impl RegistryBuilder {
    /// Create a new Registry builder
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::default(),
            clock: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    pub fn with_policy(mut self, policy: AdmissionPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Enforce (or tolerate) duplicate process ids on add
    pub fn with_unique_ids(mut self, unique_ids: bool) -> Self {
        self.config.unique_ids = unique_ids;
        self
    }

    /// Inject the time source used for entry timestamps
    pub fn with_clock(mut self, clock: Arc<dyn TimeSource>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the Registry
    pub fn build(self) -> RegistryResult<Registry> {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Registry::from_parts(self.config, clock)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
