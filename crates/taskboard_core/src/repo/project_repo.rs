//! Project repository.
//!
//! # Responsibility
//! - CRUD for projects on top of a [`RecordStore`].
//!
//! # Invariants
//! - Deleting a project leaves its tasks untouched.

use crate::model::project::{Project, ProjectDraft, ProjectId, ProjectPatch};
use crate::repo::{RepoError, RepoResult};
use crate::store::{Record, RecordStore, StoreError};
use log::info;

/// Project CRUD over an injected store.
pub struct ProjectRepository<S> {
    store: S,
}

impl<S: RecordStore<Project>> ProjectRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists all projects in creation order.
    pub async fn list(&self) -> RepoResult<Vec<Project>> {
        self.store.list().await.map_err(map_store_error)
    }

    pub async fn get(&self, id: ProjectId) -> RepoResult<Project> {
        self.store.get(id).await.map_err(map_store_error)
    }

    /// Creates a project; `created_at` is set by the store.
    pub async fn create(&self, draft: ProjectDraft) -> RepoResult<Project> {
        let project = self.store.create(draft).await.map_err(map_store_error)?;
        info!(
            "event=project_create module=repo status=ok id={} columns={}",
            project.id,
            project.columns.len()
        );
        Ok(project)
    }

    /// Merges `patch` into the project and refreshes `updated_at`.
    pub async fn update(&self, id: ProjectId, patch: ProjectPatch) -> RepoResult<Project> {
        self.store.update(id, patch).await.map_err(map_store_error)
    }

    /// Removes the project. Tasks referencing it are not cascaded.
    pub async fn delete(&self, id: ProjectId) -> RepoResult<()> {
        self.store.delete(id).await.map_err(map_store_error)?;
        info!("event=project_delete module=repo status=ok id={id}");
        Ok(())
    }
}

fn map_store_error(err: StoreError) -> RepoError {
    RepoError::from_store(Project::KIND, err)
}
