//! Board use-case service.
//!
//! # Responsibility
//! - Act as the input boundary: validate drafts and patches before they
//!   reach the repositories.
//! - Resolve the active project and compose filter + projections for views.
//!
//! # Invariants
//! - A task is only created, updated or moved to a status that names a
//!   column of its stored project, never of a caller-held copy.
//! - A project's columns are never changed to drop a status in use.
//! - A task is only changed through the project it belongs to.
//! - Views never mutate state.

use crate::config::BoardConfig;
use crate::model::project::{columns_accept, Project, ProjectDraft, ProjectId, ProjectPatch};
use crate::model::task::{Task, TaskDraft, TaskId, TaskPatch};
use crate::model::validation::ValidationError;
use crate::projection::board::{group_by_column, Board};
use crate::projection::timeline::{Timeline, TimelineCursor};
use crate::repo::project_repo::ProjectRepository;
use crate::repo::task_repo::{MoveOutcome, TaskRepository};
use crate::repo::RepoError;
use crate::search::filter::{distinct_assignees, filter_tasks, TaskFilter};
use crate::store::RecordStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from board use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardServiceError {
    /// Payload failed input validation.
    Validation(ValidationError),
    /// Status does not name a column of the project.
    UnknownColumn {
        project_id: ProjectId,
        status: String,
    },
    /// Column update would drop a status still used by a task.
    ColumnInUse {
        project_id: ProjectId,
        status: String,
    },
    /// Target project does not exist.
    ProjectNotFound(ProjectId),
    /// Target task does not exist.
    TaskNotFound(TaskId),
    /// Task exists but belongs to another project.
    TaskNotInProject {
        task_id: TaskId,
        project_id: ProjectId,
    },
    /// No project exists to fall back to.
    NoProjects,
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownColumn { project_id, status } => {
                write!(f, "project {project_id} has no column `{status}`")
            }
            Self::ColumnInUse { project_id, status } => {
                write!(f, "project {project_id} still has tasks in column `{status}`")
            }
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::TaskNotInProject {
                task_id,
                project_id,
            } => write!(f, "task {task_id} does not belong to project {project_id}"),
            Self::NoProjects => write!(f, "no projects found"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for BoardServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for BoardServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound {
                entity: "project",
                id,
            } => Self::ProjectNotFound(id),
            RepoError::NotFound { entity: "task", id } => Self::TaskNotFound(id),
            other => Self::Repo(other),
        }
    }
}

pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// A project together with its tasks, as loaded for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub project: Project,
    pub tasks: Vec<Task>,
}

/// Board facade over project and task repositories.
pub struct BoardService<P, T> {
    projects: ProjectRepository<P>,
    tasks: TaskRepository<T>,
    config: BoardConfig,
}

impl<P, T> BoardService<P, T>
where
    P: RecordStore<Project>,
    T: RecordStore<Task>,
{
    pub fn new(
        projects: ProjectRepository<P>,
        tasks: TaskRepository<T>,
        config: BoardConfig,
    ) -> Self {
        Self {
            projects,
            tasks,
            config,
        }
    }

    pub fn projects(&self) -> &ProjectRepository<P> {
        &self.projects
    }

    pub fn tasks(&self) -> &TaskRepository<T> {
        &self.tasks
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub async fn list_projects(&self) -> BoardServiceResult<Vec<Project>> {
        Ok(self.projects.list().await?)
    }

    /// Validates and creates a project.
    pub async fn create_project(&self, draft: ProjectDraft) -> BoardServiceResult<Project> {
        draft.validate()?;
        Ok(self.projects.create(draft).await?)
    }

    /// Loads one project and its tasks.
    ///
    /// With `None`, the first project is used.
    pub async fn load_board(
        &self,
        project_id: Option<ProjectId>,
    ) -> BoardServiceResult<BoardSnapshot> {
        let project = match project_id {
            Some(id) => self.projects.get(id).await?,
            None => self
                .projects
                .list()
                .await?
                .into_iter()
                .next()
                .ok_or(BoardServiceError::NoProjects)?,
        };
        let tasks = self.tasks.get_by_project(project.id).await?;
        info!(
            "event=board_load module=service status=ok project={} tasks={}",
            project.id,
            tasks.len()
        );
        Ok(BoardSnapshot { project, tasks })
    }

    /// Validates and merges `patch` into a stored project.
    ///
    /// A new column set must still hold every status used by the project's
    /// tasks, so an update never orphans a task.
    pub async fn update_project(
        &self,
        id: ProjectId,
        patch: ProjectPatch,
    ) -> BoardServiceResult<Project> {
        patch.validate()?;
        if let Some(columns) = patch.columns.as_deref() {
            let tasks = self.tasks.get_by_project(id).await?;
            if let Some(task) = tasks
                .iter()
                .find(|task| !columns_accept(columns, &task.status))
            {
                warn!(
                    "event=project_update module=service status=rejected project={id} task={}",
                    task.id
                );
                return Err(BoardServiceError::ColumnInUse {
                    project_id: id,
                    status: task.status.clone(),
                });
            }
        }
        Ok(self.projects.update(id, patch).await?)
    }

    /// Deletes a project. Its tasks are kept.
    pub async fn delete_project(&self, id: ProjectId) -> BoardServiceResult<()> {
        Ok(self.projects.delete(id).await?)
    }

    /// Validates and creates a task under the stored project `project_id`.
    ///
    /// The draft's project reference is overwritten with the project's key,
    /// and an empty status becomes the project's first column.
    pub async fn create_task(
        &self,
        project_id: ProjectId,
        mut draft: TaskDraft,
    ) -> BoardServiceResult<Task> {
        let project = self.projects.get(project_id).await?;
        draft.project_id = project.key();
        if draft.status.trim().is_empty() {
            draft.status = project.default_status().to_string();
        }
        draft.validate()?;
        ensure_column(&project, &draft.status)?;
        Ok(self.tasks.create(draft).await?)
    }

    /// Validates and merges `patch` into a task of project `project_id`.
    pub async fn update_task(
        &self,
        project_id: ProjectId,
        id: TaskId,
        patch: TaskPatch,
    ) -> BoardServiceResult<Task> {
        patch.validate()?;
        let project = self.projects.get(project_id).await?;
        if let Some(status) = patch.status.as_deref() {
            ensure_column(&project, status)?;
        }
        self.ensure_membership(&project, id).await?;
        Ok(self.tasks.update(id, patch).await?)
    }

    /// Moves a task of project `project_id` to another column.
    pub async fn move_task(
        &self,
        project_id: ProjectId,
        id: TaskId,
        status: &str,
    ) -> BoardServiceResult<MoveOutcome> {
        let project = self.projects.get(project_id).await?;
        ensure_column(&project, status)?;
        self.ensure_membership(&project, id).await?;
        Ok(self.tasks.move_task(id, status).await?)
    }

    /// Deletes a task of project `project_id`.
    pub async fn delete_task(&self, project_id: ProjectId, id: TaskId) -> BoardServiceResult<()> {
        let project = self.projects.get(project_id).await?;
        self.ensure_membership(&project, id).await?;
        Ok(self.tasks.delete(id).await?)
    }

    /// Filters the snapshot and groups it into the project's columns.
    pub fn board_view(
        &self,
        snapshot: &BoardSnapshot,
        search_term: &str,
        filter: &TaskFilter,
    ) -> Board {
        let visible = filter_tasks(&snapshot.tasks, search_term, filter);
        group_by_column(&visible, &snapshot.project.columns)
    }

    /// Filters the snapshot and buckets it into the cursor's week.
    pub fn timeline_view(
        &self,
        snapshot: &BoardSnapshot,
        search_term: &str,
        filter: &TaskFilter,
        cursor: &TimelineCursor,
    ) -> Timeline {
        let visible = filter_tasks(&snapshot.tasks, search_term, filter);
        cursor.project(&visible, self.config.week_start)
    }

    /// Assignee choices for the filter picker.
    pub fn assignees(&self, snapshot: &BoardSnapshot) -> Vec<String> {
        distinct_assignees(&snapshot.tasks)
    }

    async fn ensure_membership(&self, project: &Project, id: TaskId) -> BoardServiceResult<()> {
        let task = self.tasks.get(id).await?;
        if !task.belongs_to(project.id) {
            warn!(
                "event=task_scope module=service status=rejected task={id} project={}",
                project.id
            );
            return Err(BoardServiceError::TaskNotInProject {
                task_id: id,
                project_id: project.id,
            });
        }
        Ok(())
    }
}

fn ensure_column(project: &Project, status: &str) -> BoardServiceResult<()> {
    if project.accepts_status(status) {
        return Ok(());
    }
    Err(BoardServiceError::UnknownColumn {
        project_id: project.id,
        status: status.to_string(),
    })
}
