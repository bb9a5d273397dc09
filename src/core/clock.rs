/*!
 * Time Sources
 * Entry timestamps for tracked processes
 */

use super::types::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies comparable timestamps on demand
pub trait TimeSource: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time source (microseconds since UNIX epoch)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        let micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or_default();
        Timestamp(micros)
    }
}

/// Strictly increasing time source
///
/// Every call returns a timestamp greater than the previous one, which makes
/// entry-time ordering deterministic regardless of wall-clock resolution.
/// The counter saturates at `u64::MAX` instead of wrapping.
#[derive(Debug)]
pub struct SequentialClock {
    counter: AtomicU64,
    step: u64,
}

impl SequentialClock {
    pub fn new() -> Self {
        Self::starting_at(0, 1)
    }

    pub fn starting_at(start: u64, step: u64) -> Self {
        Self {
            counter: AtomicU64::new(start),
            step: step.max(1),
        }
    }
}

impl Default for SequentialClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SequentialClock {
    fn now(&self) -> Timestamp {
        let step = self.step;
        let previous = self
            .counter
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| {
                Some(c.saturating_add(step))
            })
            .unwrap_or_else(|c| c);
        Timestamp(previous.saturating_add(step))
    }
}
