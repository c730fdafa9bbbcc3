//! Task and task-list records.
//!
//! # Responsibility
//! - Define the titled, ordered task collection and its single task rows.
//! - Provide completion helpers shared by store and UI projections.
//!
//! # Invariants
//! - `completed_at` transitions unset -> set exactly once (monotonic
//!   completion); it is never cleared, even if a task is un-toggled later.
//! - Task order inside a list is the creation order of its entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::now_epoch_ms;

/// Stable identifier for a task list.
pub type ListId = Uuid;

/// Stable identifier for a single task within a list.
pub type TaskId = Uuid;

/// One actionable entry inside a task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id, independent of the owning list.
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    /// Creates an uncompleted task stamped with the current time.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            created_at: now_epoch_ms(),
        }
    }
}

/// A titled, ordered collection of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: ListId,
    pub title: String,
    pub tasks: Vec<Task>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Set on first full completion, never cleared afterwards.
    pub completed_at: Option<i64>,
}

impl TaskList {
    /// Builds a list from task texts, preserving input order.
    pub fn new(title: impl Into<String>, task_texts: &[String]) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            tasks: task_texts
                .iter()
                .map(|text| Task::new(text.as_str()))
                .collect(),
            created_at: now_epoch_ms(),
            completed_at: None,
        }
    }

    /// Number of completed tasks.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// True when the list has at least one task and all of them are done.
    ///
    /// An empty list is never "fully completed"; it cannot earn a reward by
    /// construction alone.
    pub fn is_fully_completed(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|task| task.completed)
    }

    /// True once the completion reward has been granted for this list.
    pub fn is_rewarded(&self) -> bool {
        self.completed_at.is_some()
    }
}
