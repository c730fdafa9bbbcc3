//! Core domain logic for Mind Notes.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod extract;
pub mod level;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use extract::{extract_task_list, TaskListDraft};
pub use level::{add_experience, experience_for_list_completion, LEVEL_THRESHOLD_XP};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::progress::UserProgress;
pub use model::state::{ActiveTab, AppState};
pub use model::task_list::{ListId, Task, TaskId, TaskList};
pub use repo::state_repo::{
    RepoError, RepoResult, SqliteStateRepository, StateRepository, STATE_KEY,
};
pub use service::task_list_service::{CompletionReward, TaskListService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
