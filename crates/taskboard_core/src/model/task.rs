//! Task domain model.
//!
//! # Responsibility
//! - Define the task record placed on board columns and timeline days.
//! - Define create (`TaskDraft`) and merge-update (`TaskPatch`) payloads.
//!
//! # Invariants
//! - `status` names a column of the owning project (checked at the input
//!   boundary, not here).
//! - `project_id` holds the [`project_key`] of the owning project.
//! - Patches carry no identity field, so an update can never change `id`.

use crate::model::{double_option, optional_due_date, patch_due_date};
use crate::model::project::{project_key, ProjectId};
use crate::model::validation::{require_non_blank, ValidationError};
use crate::store::{Record, RecordId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Identity of a task record.
pub type TaskId = RecordId;

/// Task urgency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!(
                "unsupported priority `{other}`; expected low|medium|high"
            )),
        }
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Serialized as `Id` to match the external record shape.
    #[serde(rename = "Id")]
    pub id: TaskId,
    /// String key of the owning project, see [`project_key`].
    pub project_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the board column this task sits in.
    pub status: String,
    #[serde(default)]
    pub priority: Priority,
    pub assignee: String,
    /// Calendar day only; places the task on the timeline when set.
    #[serde(default, deserialize_with = "optional_due_date")]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Returns whether this task belongs to the given project.
    pub fn belongs_to(&self, project_id: ProjectId) -> bool {
        self.project_id == project_key(project_id)
    }
}

/// Create payload for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub project_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Empty means "first column of the project" at the service boundary.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: Priority,
    pub assignee: String,
    /// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(default, deserialize_with = "optional_due_date")]
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Creates a draft with default priority and no description/due date.
    pub fn new(
        project_id: ProjectId,
        title: impl Into<String>,
        assignee: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_key(project_id),
            title: title.into(),
            description: None,
            status: status.into(),
            priority: Priority::default(),
            assignee: assignee.into(),
            due_date: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Checks the required `title` and `assignee` fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.title, ValidationError::EmptyTitle)?;
        require_non_blank(&self.assignee, ValidationError::EmptyAssignee)
    }
}

/// Merge payload for a task update. Absent fields keep stored values.
///
/// Unknown wire fields (including an `Id`) are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub assignee: Option<String>,
    /// `Some(None)` removes the task from the timeline.
    #[serde(default, deserialize_with = "patch_due_date")]
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Patch that only changes the board column.
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    /// Checks only the required fields this patch supplies.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = self.title.as_deref() {
            require_non_blank(title, ValidationError::EmptyTitle)?;
        }
        if let Some(assignee) = self.assignee.as_deref() {
            require_non_blank(assignee, ValidationError::EmptyAssignee)?;
        }
        Ok(())
    }
}

impl Record for Task {
    type Draft = TaskDraft;
    type Patch = TaskPatch;

    const KIND: &'static str = "task";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: TaskDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            project_id: draft.project_id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            assignee: draft.assignee,
            due_date: draft.due_date,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: TaskPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        self.updated_at = now;
    }
}
