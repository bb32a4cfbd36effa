use tempfile::tempdir;
use uuid::Uuid;
use zengoal_core::{GoalError, GoalService, KvStorage};

fn in_memory_service() -> GoalService {
    GoalService::new(KvStorage::open_in_memory().unwrap())
}

#[test]
fn full_goal_lifecycle_scenario() {
    let mut service = in_memory_service();
    assert!(service.goals().is_empty());
    assert_eq!(service.progress_percent(), 0.0);

    let id = service.add_goal("Run 5k", "").unwrap();
    assert_eq!(service.goals().len(), 1);
    assert_eq!(service.goals()[0].id, id);
    assert!(!service.goals()[0].is_completed);

    let completed = service.toggle_completed(id).unwrap();
    assert!(completed);
    assert_eq!(service.progress_percent(), 100.0);

    service.update_notes(id, "Did it!").unwrap();
    assert_eq!(service.goals()[0].notes, "Did it!");
    assert!(service.goals()[0].is_completed);

    service.remove_goal(id).unwrap();
    assert!(service.goals().is_empty());
    assert_eq!(service.progress_percent(), 0.0);
}

#[test]
fn new_goals_appear_newest_first() {
    let mut service = in_memory_service();
    let first = service.add_goal("first", "").unwrap();
    let second = service.add_goal("second", "").unwrap();

    let ids: Vec<_> = service.goals().iter().map(|goal| goal.id).collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn blank_title_is_rejected_at_the_boundary() {
    let mut service = in_memory_service();
    let err = service.add_goal("   ", "notes").unwrap_err();
    assert!(matches!(err, GoalError::Validation(_)));
    assert!(service.goals().is_empty());
}

#[test]
fn operations_on_unknown_ids_report_not_found() {
    let mut service = in_memory_service();
    service.add_goal("keep me", "").unwrap();
    let missing = Uuid::new_v4();

    assert!(matches!(
        service.remove_goal(missing),
        Err(GoalError::NotFound(id)) if id == missing
    ));
    assert!(matches!(
        service.toggle_completed(missing),
        Err(GoalError::NotFound(_))
    ));
    assert!(matches!(
        service.update_notes(missing, "ignored"),
        Err(GoalError::NotFound(_))
    ));
    assert_eq!(service.goals().len(), 1);
}

#[test]
fn toggling_back_reopens_the_goal() {
    let mut service = in_memory_service();
    let id = service.add_goal("on and off", "").unwrap();

    assert!(service.toggle_completed(id).unwrap());
    assert!(!service.toggle_completed(id).unwrap());
    assert_eq!(service.completed_count(), 0);
}

#[test]
fn progress_counts_partial_completion() {
    let mut service = in_memory_service();
    let done = service.add_goal("done", "").unwrap();
    service.add_goal("open", "").unwrap();
    service.toggle_completed(done).unwrap();

    assert_eq!(service.completed_count(), 1);
    assert_eq!(service.progress_percent(), 50.0);
}

#[test]
fn goals_survive_service_restart_over_the_same_file() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("goals.db");

    let id = {
        let mut service = GoalService::new(KvStorage::open(&db_path).unwrap());
        let id = service.add_goal("persisted", "across runs").unwrap();
        service.toggle_completed(id).unwrap();
        id
    };

    let service = GoalService::new(KvStorage::open(&db_path).unwrap());
    assert_eq!(service.goals().len(), 1);
    assert_eq!(service.goals()[0].id, id);
    assert_eq!(service.goals()[0].notes, "across runs");
    assert!(service.goals()[0].is_completed);
}

#[test]
fn restart_with_corrupt_stored_state_starts_empty() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("goals.db");

    {
        let storage = KvStorage::open(&db_path).unwrap();
        storage
            .put(zengoal_core::GOALS_STORE_KEY, "not a goal list")
            .unwrap();
    }

    let service = GoalService::new(KvStorage::open(&db_path).unwrap());
    assert!(service.goals().is_empty());
}
