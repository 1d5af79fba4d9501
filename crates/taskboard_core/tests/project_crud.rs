use taskboard_core::{
    InMemoryStore, LatencyProfile, Project, ProjectDraft, ProjectPatch, ProjectRepository,
    RepoError, Task, TaskDraft, TaskRepository,
};

fn project_repo() -> ProjectRepository<InMemoryStore<Project>> {
    ProjectRepository::new(InMemoryStore::new(LatencyProfile::instant()))
}

#[tokio::test]
async fn create_sets_created_at_and_leaves_updated_at_empty() {
    let repo = project_repo();
    let project = repo
        .create(ProjectDraft::new("Demo").with_column("Todo", "gray"))
        .await
        .unwrap();

    assert_eq!(project.id, 1);
    assert!(project.updated_at.is_none());
    assert_eq!(repo.get(1).await.unwrap(), project);
}

#[tokio::test]
async fn update_merges_fields_and_keeps_identity() {
    let repo = project_repo();
    let project = repo
        .create(
            ProjectDraft::new("Demo")
                .with_description("first")
                .with_column("Todo", "gray"),
        )
        .await
        .unwrap();

    let patch = ProjectPatch {
        name: Some("Renamed".to_string()),
        ..ProjectPatch::default()
    };
    let updated = repo.update(project.id, patch).await.unwrap();

    assert_eq!(updated.id, project.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description.as_deref(), Some("first"));
    assert_eq!(updated.columns, project.columns);
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn delete_missing_project_is_not_found() {
    let repo = project_repo();
    let err = repo.delete(7).await.unwrap_err();
    assert_eq!(
        err,
        RepoError::NotFound {
            entity: "project",
            id: 7
        }
    );
    assert_eq!(err.to_string(), "project not found: 7");
}

#[tokio::test]
async fn deleting_a_project_does_not_cascade_to_tasks() {
    let projects = project_repo();
    let tasks = TaskRepository::new(InMemoryStore::<Task>::new(LatencyProfile::instant()));

    let project = projects
        .create(ProjectDraft::new("Doomed").with_column("Todo", "gray"))
        .await
        .unwrap();
    tasks
        .create(TaskDraft::new(project.id, "orphan soon", "Ada", "Todo"))
        .await
        .unwrap();

    projects.delete(project.id).await.unwrap();

    assert!(projects.list().await.unwrap().is_empty());
    assert_eq!(tasks.get_by_project(project.id).await.unwrap().len(), 1);
}
