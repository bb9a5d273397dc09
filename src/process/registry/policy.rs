/*!
 * Admission Policy
 * Decides what happens when a process arrives at a full registry
 */

use super::entry::TrackedEntry;
use crate::core::errors::RegistryError;
use crate::core::types::{Priority, RegistryResult};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Admission policy, fixed at construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionPolicy {
    /// Fail the add with `CapacityExceeded`
    #[default]
    Reject,
    /// Evict the longest-resident process (FIFO)
    OldestOut,
    /// Evict the lowest-priority, oldest process if the newcomer outranks it
    LowestPriorityOut,
}

/// Outcome of an admission decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Admission {
    /// Room available, insert
    Insert,
    /// Remove and terminate the entry at this storage index, then insert
    EvictThenInsert(usize),
    /// Leave storage untouched and do not admit
    Decline,
}

impl AdmissionPolicy {
    /// Decide admission of a process with `incoming` priority.
    ///
    /// Pure: never mutates `entries`. `entries` is in arrival order, so the
    /// front is always the oldest entry.
    pub(crate) fn decide(
        self,
        entries: &VecDeque<TrackedEntry>,
        capacity: usize,
        incoming: Priority,
    ) -> RegistryResult<Admission> {
        if entries.len() < capacity {
            return Ok(Admission::Insert);
        }

        match self {
            AdmissionPolicy::Reject => Err(RegistryError::CapacityExceeded { capacity }),
            AdmissionPolicy::OldestOut => Ok(Admission::EvictThenInsert(0)),
            AdmissionPolicy::LowestPriorityOut => {
                // min_by_key keeps the first minimum, so equal timestamps fall
                // back to arrival order
                let victim = entries
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, entry)| entry.eviction_key());

                match victim {
                    Some((index, entry)) if entry.priority().weight() < incoming.weight() => {
                        Ok(Admission::EvictThenInsert(index))
                    }
                    _ => Ok(Admission::Decline),
                }
            }
        }
    }
}

impl fmt::Display for AdmissionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AdmissionPolicy::Reject => "reject",
            AdmissionPolicy::OldestOut => "oldest_out",
            AdmissionPolicy::LowestPriorityOut => "lowest_priority_out",
        };
        f.write_str(name)
    }
}

impl FromStr for AdmissionPolicy {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(AdmissionPolicy::Reject),
            "oldest_out" | "fifo" => Ok(AdmissionPolicy::OldestOut),
            "lowest_priority_out" | "priority" => Ok(AdmissionPolicy::LowestPriorityOut),
            other => Err(RegistryError::InvalidConfiguration(format!(
                "unknown admission policy '{}'",
                other
            ))),
        }
    }
}
