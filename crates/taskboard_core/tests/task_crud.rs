use taskboard_core::{
    group_by_column, Column, InMemoryStore, LatencyProfile, MoveOutcome, Priority, ProjectDraft,
    ProjectRepository, RepoError, Task, TaskDraft, TaskPatch, TaskRepository,
};

fn task_repo() -> TaskRepository<InMemoryStore<Task>> {
    TaskRepository::new(InMemoryStore::new(LatencyProfile::instant()))
}

fn draft(project_id: u64, title: &str) -> TaskDraft {
    TaskDraft::new(project_id, title, "Ada", "Todo")
}

#[tokio::test]
async fn nth_create_on_empty_collection_gets_identity_n() {
    let repo = task_repo();
    for expected in 1..=5 {
        let task = repo.create(draft(1, "task")).await.unwrap();
        assert_eq!(task.id, expected);
    }
}

#[tokio::test]
async fn identities_are_never_reused_after_deletes() {
    let repo = task_repo();
    let mut ever_assigned = Vec::new();
    for _ in 0..4 {
        ever_assigned.push(repo.create(draft(1, "task")).await.unwrap().id);
    }
    repo.delete(4).await.unwrap();
    repo.delete(2).await.unwrap();

    let next = repo.create(draft(1, "after delete")).await.unwrap();
    assert!(ever_assigned.iter().all(|id| next.id > *id));
}

#[tokio::test]
async fn update_preserves_identity_even_when_payload_names_another_id() {
    let repo = task_repo();
    let created = repo.create(draft(1, "original")).await.unwrap();
    repo.create(draft(1, "other")).await.unwrap();

    let patch: TaskPatch =
        serde_json::from_str(r#"{"Id":2,"id":2,"title":"renamed","priority":"high"}"#).unwrap();
    let updated = repo.update(created.id, patch).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.priority, Priority::High);
    assert_eq!(updated.assignee, "Ada");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let untouched = repo.get(2).await.unwrap();
    assert_eq!(untouched.title, "other");
}

#[tokio::test]
async fn get_by_project_uses_exact_project_key() {
    let repo = task_repo();
    repo.create(draft(1, "one")).await.unwrap();
    repo.create(draft(11, "eleven")).await.unwrap();
    repo.create(draft(1, "one again")).await.unwrap();

    let titles: Vec<String> = repo
        .get_by_project(1)
        .await
        .unwrap()
        .into_iter()
        .map(|task| task.title)
        .collect();
    assert_eq!(titles, vec!["one", "one again"]);
}

#[tokio::test]
async fn move_to_current_status_is_a_no_op() {
    let repo = task_repo();
    let created = repo.create(draft(1, "stay")).await.unwrap();

    let outcome = repo.move_task(created.id, "Todo").await.unwrap();
    assert!(!outcome.is_moved());
    assert_eq!(outcome.task().updated_at, created.updated_at);
}

#[tokio::test]
async fn create_then_move_places_task_in_done_only() {
    let projects = ProjectRepository::new(InMemoryStore::new(LatencyProfile::instant()));
    let project = projects
        .create(
            ProjectDraft::new("Demo")
                .with_column("Todo", "gray")
                .with_column("Done", "green"),
        )
        .await
        .unwrap();
    assert_eq!(project.id, 1);
    assert_eq!(
        project.columns,
        vec![Column::new(1, "Todo", "gray"), Column::new(2, "Done", "green")]
    );

    let repo = task_repo();
    let task = repo
        .create(TaskDraft::new(project.id, "Write spec", "Ada", "Todo").with_priority(Priority::High))
        .await
        .unwrap();
    assert_eq!(task.id, 1);
    assert_eq!(task.status, "Todo");
    assert_eq!(task.project_id, "1");

    let outcome = repo.move_task(1, "Done").await.unwrap();
    assert!(matches!(outcome, MoveOutcome::Moved(ref moved) if moved.status == "Done"));

    let tasks = repo.get_by_project(project.id).await.unwrap();
    let board = group_by_column(&tasks, &project.columns);
    assert!(board.tasks_in("Todo").unwrap().is_empty());
    let done: Vec<u64> = board.tasks_in("Done").unwrap().iter().map(|t| t.id).collect();
    assert_eq!(done, vec![1]);
}

#[tokio::test]
async fn delete_of_missing_id_is_not_found_and_leaves_collection_unchanged() {
    let repo = task_repo();
    repo.create(draft(1, "keep me")).await.unwrap();
    let before = repo.list().await.unwrap();

    let err = repo.delete(999).await.unwrap_err();
    assert_eq!(
        err,
        RepoError::NotFound {
            entity: "task",
            id: 999
        }
    );
    assert_eq!(repo.list().await.unwrap(), before);
}

#[tokio::test]
async fn get_update_and_move_report_missing_tasks() {
    let repo = task_repo();
    assert!(repo.get(3).await.unwrap_err().is_not_found());
    assert!(repo
        .update(3, TaskPatch::status("Done"))
        .await
        .unwrap_err()
        .is_not_found());
    assert!(repo.move_task(3, "Done").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn patch_null_clears_due_date_and_absent_keeps_description() {
    let repo = task_repo();
    let due = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let created = repo
        .create(
            draft(1, "dated")
                .with_description("keep")
                .with_due_date(due),
        )
        .await
        .unwrap();
    assert_eq!(created.due_date, Some(due));

    let patch: TaskPatch = serde_json::from_str(r#"{"dueDate":null}"#).unwrap();
    let updated = repo.update(created.id, patch).await.unwrap();
    assert_eq!(updated.due_date, None);
    assert_eq!(updated.description.as_deref(), Some("keep"));
}
