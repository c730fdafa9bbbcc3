//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `mindnotes_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use mindnotes_core::db::open_db_in_memory;
use mindnotes_core::{SqliteStateRepository, TaskListService};

fn main() {
    println!("mindnotes_core ping={}", mindnotes_core::ping());
    println!("mindnotes_core version={}", mindnotes_core::core_version());

    match open_db_in_memory() {
        Ok(conn) => {
            let service = TaskListService::load_or_default(SqliteStateRepository::new(&conn));
            let state = service.state();
            println!(
                "state lists={} completed={} level={}",
                state.task_lists.len(),
                state.user_progress.completed_task_lists,
                state.user_progress.level
            );
        }
        Err(err) => {
            eprintln!("state probe failed: {err}");
            std::process::exit(1);
        }
    }
}
