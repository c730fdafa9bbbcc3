//! Task-list store over the persisted aggregate.
//!
//! # Responsibility
//! - Provide create/toggle/delete/complete operations on task lists.
//! - Grant completion rewards through the leveling engine exactly once per
//!   list.
//! - Persist the aggregate after every successful mutation.
//!
//! # Invariants
//! - Absent list/task ids are no-ops, never errors.
//! - A list contributes to `completed_task_lists` and experience at most
//!   once, guarded by `completed_at`.
//! - No save is issued when an operation did not change the aggregate.

use log::{debug, info, warn};

use crate::level::{add_experience, experience_for_list_completion};
use crate::model::now_epoch_ms;
use crate::model::state::{ActiveTab, AppState};
use crate::model::task_list::{ListId, TaskId, TaskList};
use crate::repo::state_repo::{RepoResult, StateRepository};

/// Outcome of a list's first full completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionReward {
    pub xp_gained: u32,
    /// True when the grant crossed at least one level threshold.
    pub leveled_up: bool,
    /// Level after the grant.
    pub level: u32,
}

/// Single logical owner of the application aggregate.
///
/// All mutations are synchronous and sequential; each successful mutation is
/// followed by one whole-aggregate save through the repository.
pub struct TaskListService<R: StateRepository> {
    repo: R,
    state: AppState,
}

impl<R: StateRepository> TaskListService<R> {
    /// Loads the stored aggregate, falling back to the default state when the
    /// key is absent or the payload cannot be decoded.
    pub fn load_or_default(repo: R) -> Self {
        let state = match repo.load() {
            Ok(Some(state)) => {
                info!(
                    "event=state_load module=service status=ok lists={}",
                    state.task_lists.len()
                );
                state
            }
            Ok(None) => {
                info!("event=state_load module=service status=absent fallback=default");
                AppState::default()
            }
            Err(err) => {
                warn!("event=state_load module=service status=error fallback=default error={err}");
                AppState::default()
            }
        };

        Self { repo, state }
    }

    /// Read access to the whole aggregate.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Switches the active tab and persists the choice.
    pub fn set_active_tab(&mut self, tab: ActiveTab) -> RepoResult<()> {
        if self.state.active_tab == tab {
            return Ok(());
        }
        self.state.active_tab = tab;
        self.save()
    }

    /// Creates a task list and prepends it to the collection (newest-first).
    ///
    /// Task texts are trimmed and blank entries dropped; the remaining tasks
    /// keep their input order. Returns a clone of the created list.
    pub fn create_list(&mut self, title: &str, task_texts: &[String]) -> RepoResult<TaskList> {
        let texts: Vec<String> = task_texts
            .iter()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        let list = TaskList::new(title.trim(), &texts);
        info!(
            "event=list_created module=service list_id={} tasks={}",
            list.id,
            list.tasks.len()
        );

        self.state.task_lists.insert(0, list.clone());
        self.save()?;
        Ok(list)
    }

    /// Flips the named task's completion flag.
    ///
    /// No-op when either id is absent. When the flip makes the list fully
    /// completed for the first time, the completion reward is granted in the
    /// same mutation and returned.
    pub fn toggle_task(
        &mut self,
        list_id: ListId,
        task_id: TaskId,
    ) -> RepoResult<Option<CompletionReward>> {
        let flipped = self
            .state
            .list_mut(list_id)
            .and_then(|list| list.tasks.iter_mut().find(|task| task.id == task_id))
            .map(|task| task.completed = !task.completed)
            .is_some();

        if !flipped {
            return Ok(None);
        }

        let reward = self.grant_completion_if_due(list_id);
        self.save()?;
        Ok(reward)
    }

    /// Removes one task from a list; the list itself stays.
    ///
    /// Returns whether anything was removed. Removing the last unfinished
    /// task can leave the list fully completed, which grants the reward the
    /// same way a completing toggle does.
    pub fn delete_task(&mut self, list_id: ListId, task_id: TaskId) -> RepoResult<bool> {
        let removed = match self.state.list_mut(list_id) {
            Some(list) => {
                let before = list.tasks.len();
                list.tasks.retain(|task| task.id != task_id);
                list.tasks.len() != before
            }
            None => false,
        };

        if !removed {
            return Ok(false);
        }

        self.grant_completion_if_due(list_id);
        self.save()?;
        Ok(true)
    }

    /// Removes a whole list. Returns whether anything was removed.
    pub fn delete_list(&mut self, list_id: ListId) -> RepoResult<bool> {
        let before = self.state.task_lists.len();
        self.state.task_lists.retain(|list| list.id != list_id);
        if self.state.task_lists.len() == before {
            return Ok(false);
        }

        self.save()?;
        Ok(true)
    }

    /// Marks a list completed and grants its reward, exactly once.
    ///
    /// Idempotent: `None` when the list is missing, not fully completed yet,
    /// or already rewarded.
    pub fn complete_list(&mut self, list_id: ListId) -> RepoResult<Option<CompletionReward>> {
        let reward = self.grant_completion_if_due(list_id);
        if reward.is_some() {
            self.save()?;
        }
        Ok(reward)
    }

    /// Applies the first-completion reward when the guard allows it.
    fn grant_completion_if_due(&mut self, list_id: ListId) -> Option<CompletionReward> {
        let task_count = {
            let list = self.state.list(list_id)?;
            if !list.is_fully_completed() || list.is_rewarded() {
                return None;
            }
            list.tasks.len()
        };

        let xp_gained = experience_for_list_completion(task_count);
        let before = self.state.user_progress;
        let mut after = add_experience(&before, xp_gained);
        after.completed_task_lists = before.completed_task_lists + 1;
        self.state.user_progress = after;

        if let Some(list) = self.state.list_mut(list_id) {
            list.completed_at = Some(now_epoch_ms());
        }

        info!(
            "event=list_completed module=service list_id={list_id} xp={xp_gained} level={} leveled_up={}",
            after.level,
            after.level > before.level
        );

        Some(CompletionReward {
            xp_gained,
            leveled_up: after.level > before.level,
            level: after.level,
        })
    }

    fn save(&self) -> RepoResult<()> {
        self.repo.save(&self.state)?;
        debug!(
            "event=state_save module=service status=ok lists={}",
            self.state.task_lists.len()
        );
        Ok(())
    }
}
