//! In-memory filter engine for board and timeline views.
//!
//! # Responsibility
//! - Apply free-text search plus assignee/priority filters to tasks.
//!
//! # Invariants
//! - Pure: no I/O, no mutation of the input.
//! - Output order equals input order.
//! - Empty search term and empty filter is the identity.

use crate::model::task::{Priority, Task};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Attribute filters selected by the user. All set fields are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFilter {
    /// Exact assignee match. An empty string counts as unset.
    pub assignee: Option<String>,
    /// Exact priority match.
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn assignee(assignee: impl Into<String>) -> Self {
        Self {
            assignee: Some(assignee.into()),
            priority: None,
        }
    }

    pub fn priority(priority: Priority) -> Self {
        Self {
            assignee: None,
            priority: Some(priority),
        }
    }

    /// Returns whether no attribute filter is active.
    pub fn is_empty(&self) -> bool {
        self.active_assignee().is_none() && self.priority.is_none()
    }

    fn active_assignee(&self) -> Option<&str> {
        self.assignee.as_deref().filter(|value| !value.is_empty())
    }

    fn accepts(&self, task: &Task) -> bool {
        if let Some(assignee) = self.active_assignee() {
            if task.assignee != assignee {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        true
    }
}

/// Returns the tasks that match `search_term` and `filter`, in input order.
///
/// A non-empty `search_term` matches when it is a case-insensitive substring
/// of the title, the description or the assignee.
pub fn filter_tasks(tasks: &[Task], search_term: &str, filter: &TaskFilter) -> Vec<Task> {
    let needle = (!search_term.is_empty()).then(|| search_term.to_lowercase());
    tasks
        .iter()
        .filter(|task| {
            needle
                .as_deref()
                .map_or(true, |needle| matches_search(task, needle))
                && filter.accepts(task)
        })
        .cloned()
        .collect()
}

fn matches_search(task: &Task, needle: &str) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(needle);
    contains(&task.title)
        || task.description.as_deref().is_some_and(contains)
        || contains(&task.assignee)
}

/// Returns the distinct assignees of `tasks`, sorted by name.
pub fn distinct_assignees(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .map(|task| task.assignee.as_str())
        .filter(|assignee| !assignee.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
