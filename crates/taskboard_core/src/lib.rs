//! Core domain logic for the task board.
//! This crate is the single source of truth for board invariants.

pub mod config;
pub mod fixtures;
pub mod logging;
pub mod model;
pub mod projection;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;

pub use config::{BoardConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{project_key, Column, Project, ProjectDraft, ProjectId, ProjectPatch};
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskPatch};
pub use model::validation::ValidationError;
pub use projection::board::{group_by_column, orphaned_tasks, Board, ColumnGroup};
pub use projection::timeline::{
    group_by_day, shift_weeks, start_of_week, DayBucket, Timeline, TimelineCursor, WeekStart,
};
pub use repo::project_repo::ProjectRepository;
pub use repo::task_repo::{MoveOutcome, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use search::filter::{distinct_assignees, filter_tasks, TaskFilter};
pub use service::board_service::{
    BoardService, BoardServiceError, BoardServiceResult, BoardSnapshot,
};
pub use store::{
    InMemoryStore, LatencyProfile, Record, RecordId, RecordStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
