//! Experience and leveling engine.
//!
//! # Responsibility
//! - Compute level progression from accumulated experience.
//! - Price the reward for completing a task list.
//!
//! # Invariants
//! - `level` is a pure function of total experience and never decreases.
//! - Experience is cumulative; level-ups do not reset it.
//! - The completion reward is monotonically non-decreasing in task count.

use crate::model::progress::UserProgress;

/// Experience required to advance one level.
pub const LEVEL_THRESHOLD_XP: u32 = 100;

/// Flat reward for finishing any task list.
const COMPLETION_BASE_XP: u32 = 50;

/// Additional reward per task in the finished list.
const COMPLETION_PER_TASK_XP: u32 = 10;

/// Applies an experience grant and recomputes the derived leveling fields.
///
/// A single large grant may cross several thresholds at once; the level is
/// recomputed from the new total rather than stepped.
pub fn add_experience(progress: &UserProgress, xp_gained: u32) -> UserProgress {
    let experience = progress.experience.saturating_add(xp_gained);
    UserProgress {
        level: experience / LEVEL_THRESHOLD_XP,
        experience,
        experience_to_next: LEVEL_THRESHOLD_XP - experience % LEVEL_THRESHOLD_XP,
        completed_task_lists: progress.completed_task_lists,
    }
}

/// Reward for completing a list with `task_count` tasks.
pub fn experience_for_list_completion(task_count: usize) -> u32 {
    let per_task = u32::try_from(task_count)
        .unwrap_or(u32::MAX)
        .saturating_mul(COMPLETION_PER_TASK_XP);
    COMPLETION_BASE_XP.saturating_add(per_task)
}
