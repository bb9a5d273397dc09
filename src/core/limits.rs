/*!
 * Registry Limits and Constants
 */

/// Capacity used when a configuration does not name one
pub const DEFAULT_CAPACITY: usize = 16;

/// Smallest capacity a registry accepts
pub const MIN_CAPACITY: usize = 1;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Capacity override for `RegistryConfig::from_env`
pub const ENV_CAPACITY: &str = "REGISTRY_CAPACITY";

/// Admission policy override for `RegistryConfig::from_env`
pub const ENV_POLICY: &str = "REGISTRY_POLICY";

/// Id uniqueness override for `RegistryConfig::from_env`
pub const ENV_UNIQUE_IDS: &str = "REGISTRY_UNIQUE_IDS";

/// Switches `init_tracing` to JSON output
pub const ENV_TRACE_JSON: &str = "REGISTRY_TRACE_JSON";
