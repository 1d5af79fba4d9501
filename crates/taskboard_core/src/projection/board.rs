//! Kanban board projection.
//!
//! # Responsibility
//! - Group tasks by status into the project's ordered columns.
//!
//! # Invariants
//! - One group per column, in column order.
//! - A task lands in at most one group: the column whose name equals its
//!   status.
//! - Tasks whose status names no column are left out of every group; use
//!   [`orphaned_tasks`] to surface them.

use crate::model::project::Column;
use crate::model::task::Task;
use log::warn;
use serde::Serialize;

/// Tasks of one board column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnGroup {
    pub column: Column,
    pub tasks: Vec<Task>,
}

/// Column-ordered board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    pub columns: Vec<ColumnGroup>,
}

impl Board {
    /// Returns the tasks of the named column, if the column exists.
    pub fn tasks_in(&self, column_name: &str) -> Option<&[Task]> {
        self.columns
            .iter()
            .find(|group| group.column.name == column_name)
            .map(|group| group.tasks.as_slice())
    }

    /// Total number of tasks placed on the board.
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|group| group.tasks.len()).sum()
    }
}

/// Groups `tasks` by status into `columns`, keeping input order per column.
pub fn group_by_column(tasks: &[Task], columns: &[Column]) -> Board {
    let board = Board {
        columns: columns
            .iter()
            .map(|column| ColumnGroup {
                column: column.clone(),
                tasks: tasks
                    .iter()
                    .filter(|task| task.status == column.name)
                    .cloned()
                    .collect(),
            })
            .collect(),
    };

    let dropped = tasks.len().saturating_sub(board.task_count());
    if dropped > 0 {
        warn!("event=board_project module=projection status=orphaned dropped={dropped}");
    }
    board
}

/// Returns tasks whose status names none of `columns`, in input order.
pub fn orphaned_tasks(tasks: &[Task], columns: &[Column]) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| !columns.iter().any(|column| column.name == task.status))
        .cloned()
        .collect()
}
