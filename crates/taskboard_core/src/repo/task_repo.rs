//! Task repository.
//!
//! # Responsibility
//! - CRUD for tasks on top of a [`RecordStore`].
//! - Per-project listing and column moves.
//!
//! # Invariants
//! - Project membership is exact string equality against [`project_key`].
//! - A move to the current status performs no write.

use crate::model::project::{project_key, ProjectId};
use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::repo::{RepoError, RepoResult};
use crate::store::{Record, RecordStore, StoreError};
use log::{debug, info};

/// Result of [`TaskRepository::move_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed; carries the updated task.
    Moved(Task),
    /// Task already had the requested status; nothing was written.
    Unchanged(Task),
}

impl MoveOutcome {
    pub fn task(&self) -> &Task {
        match self {
            Self::Moved(task) | Self::Unchanged(task) => task,
        }
    }

    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

/// Task CRUD over an injected store.
pub struct TaskRepository<S> {
    store: S,
}

impl<S: RecordStore<Task>> TaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists all tasks in creation order.
    pub async fn list(&self) -> RepoResult<Vec<Task>> {
        self.store.list().await.map_err(map_store_error)
    }

    /// Lists tasks of one project in creation order.
    pub async fn get_by_project(&self, project_id: ProjectId) -> RepoResult<Vec<Task>> {
        let key = project_key(project_id);
        self.store
            .select(move |task: &Task| task.project_id == key)
            .await
            .map_err(map_store_error)
    }

    pub async fn get(&self, id: TaskId) -> RepoResult<Task> {
        self.store.get(id).await.map_err(map_store_error)
    }

    /// Stores the draft as-is; callers validate before calling.
    pub async fn create(&self, draft: TaskDraft) -> RepoResult<Task> {
        let task = self.store.create(draft).await.map_err(map_store_error)?;
        info!(
            "event=task_create module=repo status=ok id={} project={}",
            task.id, task.project_id
        );
        Ok(task)
    }

    /// Merges `patch` into the task; identity is preserved.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> RepoResult<Task> {
        self.store.update(id, patch).await.map_err(map_store_error)
    }

    pub async fn delete(&self, id: TaskId) -> RepoResult<()> {
        self.store.delete(id).await.map_err(map_store_error)?;
        info!("event=task_delete module=repo status=ok id={id}");
        Ok(())
    }

    /// Moves a task to another board column.
    ///
    /// Does not check that `new_status` names a column of the task's
    /// project; the board service does that before calling.
    pub async fn move_task(
        &self,
        id: TaskId,
        new_status: impl Into<String>,
    ) -> RepoResult<MoveOutcome> {
        let new_status = new_status.into();
        let current = self.get(id).await?;
        if current.status == new_status {
            debug!("event=task_move module=repo status=unchanged id={id}");
            return Ok(MoveOutcome::Unchanged(current));
        }

        let moved = self.update(id, TaskPatch::status(new_status)).await?;
        info!("event=task_move module=repo status=ok id={id}");
        Ok(MoveOutcome::Moved(moved))
    }
}

fn map_store_error(err: StoreError) -> RepoError {
    RepoError::from_store(Task::KIND, err)
}
