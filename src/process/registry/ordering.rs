/*!
 * Listing Order
 * Comparators applied to a snapshot at list time; storage order is unaffected
 */

use super::entry::TrackedEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort order for `list`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Lexicographic by id
    ByIdAscending,
    ByIdDescending,
    /// By the time the process entered the registry
    #[default]
    ByEntryTimeAscending,
    ByEntryTimeDescending,
    /// By priority weight
    ByPriorityAscending,
    ByPriorityDescending,
}

impl SortOrder {
    pub(crate) fn compare(self, a: &TrackedEntry, b: &TrackedEntry) -> Ordering {
        match self {
            SortOrder::ByIdAscending => a.id().cmp(b.id()),
            SortOrder::ByIdDescending => b.id().cmp(a.id()),
            SortOrder::ByEntryTimeAscending => a.entered_at.cmp(&b.entered_at),
            SortOrder::ByEntryTimeDescending => b.entered_at.cmp(&a.entered_at),
            SortOrder::ByPriorityAscending => a.priority().weight().cmp(&b.priority().weight()),
            SortOrder::ByPriorityDescending => b.priority().weight().cmp(&a.priority().weight()),
        }
    }

    /// Stable sort, so equal keys keep storage order
    pub(crate) fn sort(self, entries: &mut [TrackedEntry]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}
