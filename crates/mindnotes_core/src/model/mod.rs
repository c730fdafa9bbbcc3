//! Domain model for the Mind Notes aggregate.
//!
//! # Responsibility
//! - Define the canonical data structures persisted as one `AppState` blob.
//! - Keep identity and timestamp conventions in one place.
//!
//! # Invariants
//! - Every task list and task carries a stable UUID identity.
//! - `TaskList::completed_at` is set at most once and never cleared.
//! - Timestamps are unix epoch milliseconds.

pub mod progress;
pub mod state;
pub mod task_list;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time as unix epoch milliseconds.
///
/// Clamps to zero for clocks set before the epoch instead of panicking.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
