//! Application aggregate root.
//!
//! # Responsibility
//! - Define the single persisted unit: tab selection, task lists, progress.
//!
//! # Invariants
//! - `task_lists` is ordered newest-first; creation prepends.
//! - The aggregate is replaced wholesale on every save (no partial writes).

use serde::{Deserialize, Serialize};

use super::progress::UserProgress;
use super::task_list::{ListId, TaskList};

/// Which primary surface the user last had active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTab {
    Notes,
    Chat,
}

/// The whole persisted application state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub active_tab: ActiveTab,
    /// Newest-first.
    pub task_lists: Vec<TaskList>,
    pub user_progress: UserProgress,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_tab: ActiveTab::Notes,
            task_lists: Vec::new(),
            user_progress: UserProgress::default(),
        }
    }
}

impl AppState {
    /// Finds a list by id.
    pub fn list(&self, list_id: ListId) -> Option<&TaskList> {
        self.task_lists.iter().find(|list| list.id == list_id)
    }

    /// Finds a list by id for mutation.
    pub fn list_mut(&mut self, list_id: ListId) -> Option<&mut TaskList> {
        self.task_lists.iter_mut().find(|list| list.id == list_id)
    }
}
