//! User progress record driven by the leveling engine.
//!
//! # Invariants
//! - `level` is derived from total `experience` and never decreases.
//! - Only `crate::level::add_experience` recomputes the leveling fields;
//!   `completed_task_lists` is incremented by the store on first completion.

use serde::{Deserialize, Serialize};

use crate::level::LEVEL_THRESHOLD_XP;

/// Cumulative experience, derived level and completion counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub level: u32,
    /// Total accumulated experience; never reset on level-up.
    pub experience: u32,
    /// Experience still needed to reach the next level threshold.
    pub experience_to_next: u32,
    pub completed_task_lists: u32,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            level: 0,
            experience: 0,
            experience_to_next: LEVEL_THRESHOLD_XP,
            completed_task_lists: 0,
        }
    }
}
