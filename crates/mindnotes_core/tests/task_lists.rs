use mindnotes_core::db::open_db_in_memory;
use mindnotes_core::{
    experience_for_list_completion, SqliteStateRepository, TaskListService,
};
use rusqlite::Connection;
use uuid::Uuid;

fn service(conn: &Connection) -> TaskListService<SqliteStateRepository<'_>> {
    TaskListService::load_or_default(SqliteStateRepository::new(conn))
}

#[test]
fn create_prepends_lists_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    service.create_list("first", &["a".to_string()]).unwrap();
    service.create_list("second", &["b".to_string()]).unwrap();

    let titles: Vec<&str> = service
        .state()
        .task_lists
        .iter()
        .map(|list| list.title.as_str())
        .collect();
    assert_eq!(titles, vec!["second", "first"]);
}

#[test]
fn create_trims_tasks_and_drops_blank_entries() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let list = service
        .create_list(
            "Groceries",
            &["Milk".to_string(), "".to_string(), " Eggs ".to_string()],
        )
        .unwrap();

    let texts: Vec<&str> = list.tasks.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["Milk", "Eggs"]);
    assert!(list.tasks.iter().all(|task| !task.completed));
}

#[test]
fn toggle_flips_and_flips_back() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let list = service
        .create_list("pair", &["a".to_string(), "b".to_string()])
        .unwrap();
    let task_id = list.tasks[0].id;

    assert!(service.toggle_task(list.id, task_id).unwrap().is_none());
    assert!(service.state().task_lists[0].tasks[0].completed);

    assert!(service.toggle_task(list.id, task_id).unwrap().is_none());
    assert!(!service.state().task_lists[0].tasks[0].completed);
}

#[test]
fn toggle_with_absent_ids_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let list = service.create_list("solo", &["a".to_string()]).unwrap();
    let before = service.state().clone();

    assert!(service
        .toggle_task(Uuid::new_v4(), list.tasks[0].id)
        .unwrap()
        .is_none());
    assert!(service
        .toggle_task(list.id, Uuid::new_v4())
        .unwrap()
        .is_none());
    assert_eq!(service.state(), &before);
}

#[test]
fn completing_all_tasks_grants_exactly_one_reward() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let list = service
        .create_list("done soon", &["a".to_string(), "b".to_string()])
        .unwrap();

    let first = service.toggle_task(list.id, list.tasks[0].id).unwrap();
    assert!(first.is_none(), "list is only half done");

    let second = service
        .toggle_task(list.id, list.tasks[1].id)
        .unwrap()
        .expect("second toggle completes the list");
    assert_eq!(second.xp_gained, experience_for_list_completion(2));

    let progress = service.state().user_progress;
    assert_eq!(progress.completed_task_lists, 1);
    assert_eq!(progress.experience, experience_for_list_completion(2));
    assert!(service.state().task_lists[0].completed_at.is_some());

    // A redundant explicit completion changes nothing.
    assert!(service.complete_list(list.id).unwrap().is_none());
    assert_eq!(service.state().user_progress.completed_task_lists, 1);
    assert_eq!(
        service.state().user_progress.experience,
        experience_for_list_completion(2)
    );
}

#[test]
fn complete_list_is_a_no_op_for_unfinished_or_missing_lists() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let list = service.create_list("open", &["a".to_string()]).unwrap();
    assert!(service.complete_list(list.id).unwrap().is_none());
    assert!(service.complete_list(Uuid::new_v4()).unwrap().is_none());
    assert_eq!(service.state().user_progress.completed_task_lists, 0);
}

#[test]
fn unticking_a_rewarded_list_never_revokes_completion() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let list = service.create_list("single", &["a".to_string()]).unwrap();
    let task_id = list.tasks[0].id;

    service
        .toggle_task(list.id, task_id)
        .unwrap()
        .expect("toggle completes the one-task list");
    let completed_at = service.state().task_lists[0].completed_at;
    assert!(completed_at.is_some());

    // Untick, then tick again: completed_at is monotonic, no second reward.
    assert!(service.toggle_task(list.id, task_id).unwrap().is_none());
    assert_eq!(service.state().task_lists[0].completed_at, completed_at);
    assert!(service.toggle_task(list.id, task_id).unwrap().is_none());
    assert_eq!(service.state().user_progress.completed_task_lists, 1);
}

#[test]
fn deleting_the_last_open_task_completes_the_list() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let list = service
        .create_list("shrinking", &["done".to_string(), "dropped".to_string()])
        .unwrap();
    service.toggle_task(list.id, list.tasks[0].id).unwrap();

    assert!(service.delete_task(list.id, list.tasks[1].id).unwrap());
    assert_eq!(service.state().task_lists[0].tasks.len(), 1);
    assert!(service.state().task_lists[0].completed_at.is_some());
    assert_eq!(service.state().user_progress.completed_task_lists, 1);
    assert_eq!(
        service.state().user_progress.experience,
        experience_for_list_completion(1)
    );
}

#[test]
fn delete_operations_on_absent_ids_are_no_ops() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let list = service.create_list("kept", &["a".to_string()]).unwrap();
    assert!(!service.delete_task(list.id, Uuid::new_v4()).unwrap());
    assert!(!service.delete_task(Uuid::new_v4(), list.tasks[0].id).unwrap());
    assert!(!service.delete_list(Uuid::new_v4()).unwrap());
    assert_eq!(service.state().task_lists.len(), 1);
}

#[test]
fn delete_list_removes_it_but_keeps_earned_progress() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    let list = service.create_list("earned", &["a".to_string()]).unwrap();
    service.toggle_task(list.id, list.tasks[0].id).unwrap();

    assert!(service.delete_list(list.id).unwrap());
    assert!(service.state().task_lists.is_empty());
    assert_eq!(service.state().user_progress.completed_task_lists, 1);
}

#[test]
fn rewards_accumulate_across_lists_and_level_up() {
    let conn = open_db_in_memory().unwrap();
    let mut service = service(&conn);

    // 50 + 10 * 3 = 80 XP per three-task list; the second completion crosses
    // the 100 XP threshold.
    let texts = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let first = service.create_list("one", &texts).unwrap();
    let second = service.create_list("two", &texts).unwrap();

    let mut last_reward = None;
    for list in [&first, &second] {
        for task in &list.tasks {
            last_reward = service.toggle_task(list.id, task.id).unwrap().or(last_reward);
        }
    }

    let reward = last_reward.expect("second list completion grants a reward");
    assert!(reward.leveled_up);
    assert_eq!(reward.level, 1);

    let progress = service.state().user_progress;
    assert_eq!(progress.completed_task_lists, 2);
    assert_eq!(progress.experience, 160);
    assert_eq!(progress.level, 1);
    assert_eq!(progress.experience_to_next, 40);
}
