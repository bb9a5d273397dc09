/*!
 * Core Module
 * Fundamental registry types and error handling
 */

pub mod clock;
pub mod errors;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use clock::{SequentialClock, SystemClock, TimeSource};
pub use errors::*;
pub use types::*;
