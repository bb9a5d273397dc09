/*!
 * Registry Configuration
 *
 * Capacity, admission policy and id uniqueness, loadable from JSON or the
 * environment.
 */

use super::policy::AdmissionPolicy;
use crate::core::errors::RegistryError;
use crate::core::limits::*;
use crate::core::types::RegistryResult;
use serde::{Deserialize, Serialize};

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RegistryConfig {
    /// Maximum number of tracked processes (must be >= 1)
    pub capacity: usize,
    /// What `add` does when the registry is full
    pub policy: AdmissionPolicy,
    /// Reject `add` of an id that is already tracked
    pub unique_ids: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            policy: AdmissionPolicy::Reject,
            unique_ids: true,
        }
    }
}

impl RegistryConfig {
    pub fn new(capacity: usize, policy: AdmissionPolicy) -> Self {
        Self {
            capacity,
            policy,
            ..Default::default()
        }
    }

    /// Check the configuration can produce a registry
    pub fn validate(&self) -> RegistryResult<()> {
        if self.capacity < MIN_CAPACITY {
            return Err(RegistryError::InvalidConfiguration(format!(
                "Registry capacity has to be bigger than 0. It was {}",
                self.capacity
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| RegistryError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from `REGISTRY_*` environment variables
    ///
    /// Unset variables keep their defaults; malformed ones are an error.
    pub fn from_env() -> RegistryResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_CAPACITY) {
            let capacity: i64 = raw.trim().parse().map_err(|_| {
                RegistryError::InvalidConfiguration(format!(
                    "{} must be an integer, got '{}'",
                    ENV_CAPACITY, raw
                ))
            })?;
            config.capacity = usize::try_from(capacity).map_err(|_| {
                RegistryError::InvalidConfiguration(format!(
                    "Registry capacity has to be bigger than 0. It was {}",
                    capacity
                ))
            })?;
        }

        if let Ok(raw) = std::env::var(ENV_POLICY) {
            config.policy = raw.parse()?;
        }

        if let Ok(raw) = std::env::var(ENV_UNIQUE_IDS) {
            config.unique_ids = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                other => {
                    return Err(RegistryError::InvalidConfiguration(format!(
                        "{} must be a boolean, got '{}'",
                        ENV_UNIQUE_IDS, other
                    )))
                }
            };
        }

        config.validate()?;
        Ok(config)
    }
}
