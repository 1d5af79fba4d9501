//! Repository layer over the storage interface.
//!
//! # Responsibility
//! - Provide entity-specific CRUD entry points for projects and tasks.
//! - Translate storage failures into entity-aware errors.
//!
//! # Invariants
//! - Repositories trust their input; draft validation happens at the service
//!   boundary (`service::board_service`).
//! - The task repository is the only writer of task state.

pub mod project_repo;
pub mod task_repo;

use crate::store::{RecordId, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for project/task operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No `entity` record with identity `id` exists.
    NotFound { entity: &'static str, id: RecordId },
}

impl RepoError {
    pub(crate) fn from_store(entity: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound { entity, id },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
        }
    }
}

impl Error for RepoError {}
