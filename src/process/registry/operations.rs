/*!
 * Registry Core Operations
 * Add, list and kill operations
 */

use super::entry::TrackedEntry;
use super::ordering::SortOrder;
use super::policy::Admission;
use super::Registry;
use crate::core::errors::RegistryError;
use crate::core::types::{Priority, RegistryResult};
use crate::process::traits::ProcessHandle;
use crate::process::view::ReadOnlyView;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

impl Registry {
    /// Add a process, applying the admission policy if the registry is full
    ///
    /// Fails with `CapacityExceeded` only under `AdmissionPolicy::Reject`.
    /// Under `LowestPriorityOut` the process may be silently declined.
    #[instrument(
        level = "info",
        skip(self, handle),
        fields(id = %handle.id(), priority = %handle.priority(), policy = %self.policy)
    )]
    pub fn add(&self, handle: Arc<dyn ProcessHandle>) -> RegistryResult<()> {
        info!("Adding process");
        let mut entries = self.entries.write();

        // the same handle is never tracked twice, whatever unique_ids says
        if entries
            .iter()
            .any(|e| e.is_handle(&handle) || (self.unique_ids && e.id() == handle.id()))
        {
            return Err(RegistryError::DuplicateId(handle.id().to_string()));
        }

        match self
            .policy
            .decide(&entries, self.capacity, handle.priority())?
        {
            Admission::Insert => {}
            Admission::EvictThenInsert(index) => {
                if let Some(victim) = entries.remove(index) {
                    info!(
                        victim = %victim.id(),
                        victim_priority = %victim.priority(),
                        "Maximum capacity reached, evicting process"
                    );
                    terminate(&victim);
                }
            }
            Admission::Decline => {
                info!("No process with lower priority found, new process not being added");
                return Ok(());
            }
        }

        entries.push_back(TrackedEntry::new(self.clock.now(), handle));
        Ok(())
    }

    /// List tracked processes as read-only views
    ///
    /// The result is a snapshot; later mutations do not affect it.
    pub fn list(&self, order: SortOrder) -> Vec<ReadOnlyView> {
        let mut snapshot: Vec<TrackedEntry> = self.entries.read().iter().cloned().collect();
        debug!(count = snapshot.len(), order = ?order, "Listing running processes");

        order.sort(&mut snapshot);
        snapshot
            .into_iter()
            .map(|entry| ReadOnlyView::new(entry.handle))
            .collect()
    }

    /// Kill the process with this id
    ///
    /// With duplicate ids tolerated, the oldest match is killed.
    pub fn kill_by_id(&self, id: &str) -> RegistryResult<()> {
        info!(id = %id, "Killing process");
        let mut entries = self.entries.write();

        let index = entries
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        if let Some(entry) = entries.remove(index) {
            terminate(&entry);
        }
        Ok(())
    }

    /// Kill every process with this priority, returning how many were killed
    pub fn kill_by_priority(&self, priority: Priority) -> usize {
        info!(priority = %priority, "Killing all processes with priority");
        let mut entries = self.entries.write();

        let (killed, kept): (VecDeque<TrackedEntry>, VecDeque<TrackedEntry>) =
            entries.drain(..).partition(|e| e.priority() == priority);
        *entries = kept;

        for entry in &killed {
            terminate(entry);
        }
        killed.len()
    }

    /// Kill every process, returning how many were killed
    pub fn kill_all(&self) -> usize {
        info!("Killing all processes");
        let mut entries = self.entries.write();

        let killed = entries.len();
        for entry in entries.drain(..) {
            terminate(&entry);
        }
        killed
    }
}

/// Best-effort termination; the entry is already out of storage
fn terminate(entry: &TrackedEntry) {
    if let Err(e) = entry.handle.terminate() {
        warn!(id = %entry.id(), error = %e, "Process termination failed");
    }
}
