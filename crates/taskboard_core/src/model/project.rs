//! Project domain model.
//!
//! # Responsibility
//! - Define the project record and its ordered column set.
//! - Provide the string key tasks use to reference a project.
//!
//! # Invariants
//! - Column names are unique within one project.
//! - Column order is board order.
//! - `updated_at` stays `None` until the first update.

use crate::model::double_option;
use crate::model::validation::{require_non_blank, ValidationError};
use crate::store::{Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identity of a project record.
pub type ProjectId = RecordId;

/// Status name used when a project has no columns at all.
pub const FALLBACK_STATUS: &str = "Todo";

/// Returns the key stored in `Task::project_id` for the given project.
///
/// Tasks keep the project reference in string form; every comparison goes
/// through this function so the numeric/string normalization happens in one
/// place.
pub fn project_key(id: ProjectId) -> String {
    id.to_string()
}

/// One named status bucket of a project board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique within the owning project.
    pub id: u32,
    /// Unique within the owning project; tasks reference it via `status`.
    pub name: String,
    /// Opaque display value.
    pub color: String,
}

impl Column {
    pub fn new(id: u32, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Serialized as `Id` to match the external record shape.
    #[serde(rename = "Id")]
    pub id: ProjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Returns the key tasks of this project carry in `project_id`.
    pub fn key(&self) -> String {
        project_key(self.id)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    /// Returns whether a task of this project may carry `status`.
    ///
    /// A project without columns only accepts [`FALLBACK_STATUS`].
    pub fn accepts_status(&self, status: &str) -> bool {
        columns_accept(&self.columns, status)
    }

    /// Status assigned to new tasks when the caller leaves it empty.
    pub fn default_status(&self) -> &str {
        self.columns
            .first()
            .map(|column| column.name.as_str())
            .unwrap_or(FALLBACK_STATUS)
    }
}

/// Create payload for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl ProjectDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a column; its id is its 1-based position.
    pub fn with_column(mut self, name: impl Into<String>, color: impl Into<String>) -> Self {
        let id = self.columns.len() as u32 + 1;
        self.columns.push(Column::new(id, name, color));
        self
    }

    /// Checks the required name and column uniqueness.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.name, ValidationError::EmptyProjectName)?;
        validate_columns(&self.columns)
    }
}

/// Merge payload for a project update. Absent fields keep stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default)]
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub columns: Option<Vec<Column>>,
}

impl ProjectPatch {
    /// Checks only the fields this patch supplies.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = self.name.as_deref() {
            require_non_blank(name, ValidationError::EmptyProjectName)?;
        }
        if let Some(columns) = self.columns.as_deref() {
            validate_columns(columns)?;
        }
        Ok(())
    }
}

/// Status check shared by stored projects and pending column sets.
pub(crate) fn columns_accept(columns: &[Column], status: &str) -> bool {
    if columns.is_empty() {
        return status == FALLBACK_STATUS;
    }
    columns.iter().any(|column| column.name == status)
}

fn validate_columns(columns: &[Column]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for column in columns {
        require_non_blank(&column.name, ValidationError::EmptyColumnName)?;
        if !seen.insert(column.name.as_str()) {
            return Err(ValidationError::DuplicateColumn(column.name.clone()));
        }
    }
    Ok(())
}

impl Record for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    const KIND: &'static str = "project";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ProjectDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            columns: draft.columns,
            created_at: now,
            updated_at: None,
        }
    }

    fn apply_patch(&mut self, patch: ProjectPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(columns) = patch.columns {
            self.columns = columns;
        }
        self.updated_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::{columns_accept, project_key, Column, ProjectDraft, ProjectPatch, ValidationError};

    #[test]
    fn draft_assigns_positional_column_ids() {
        let draft = ProjectDraft::new("Demo")
            .with_column("Todo", "#e5e7eb")
            .with_column("Done", "#bbf7d0");
        let ids: Vec<u32> = draft.columns.iter().map(|column| column.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn draft_rejects_blank_name_and_duplicate_columns() {
        assert_eq!(
            ProjectDraft::new("  ").validate(),
            Err(ValidationError::EmptyProjectName)
        );

        let duplicated = ProjectDraft::new("Demo")
            .with_column("Todo", "gray")
            .with_column("Todo", "blue");
        assert_eq!(
            duplicated.validate(),
            Err(ValidationError::DuplicateColumn("Todo".to_string()))
        );
    }

    #[test]
    fn patch_distinguishes_absent_and_null_description() {
        let absent: ProjectPatch = serde_json::from_str(r#"{"name":"Renamed"}"#).unwrap();
        assert_eq!(absent.description, None);

        let cleared: ProjectPatch = serde_json::from_str(r#"{"description":null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));
    }

    #[test]
    fn patch_validation_checks_only_supplied_fields() {
        assert!(ProjectPatch::default().validate().is_ok());

        let blank_name = ProjectPatch {
            name: Some(String::new()),
            ..ProjectPatch::default()
        };
        assert_eq!(blank_name.validate(), Err(ValidationError::EmptyProjectName));

        let duplicated = ProjectPatch {
            columns: Some(vec![Column::new(1, "Todo", "gray"), Column::new(2, "Todo", "blue")]),
            ..ProjectPatch::default()
        };
        assert_eq!(
            duplicated.validate(),
            Err(ValidationError::DuplicateColumn("Todo".to_string()))
        );
    }

    #[test]
    fn empty_column_set_only_accepts_fallback_status() {
        assert!(columns_accept(&[], "Todo"));
        assert!(!columns_accept(&[], "Done"));

        let columns = vec![Column::new(1, "Backlog", "gray")];
        assert!(columns_accept(&columns, "Backlog"));
        assert!(!columns_accept(&columns, "Todo"));
    }

    #[test]
    fn project_key_is_decimal_string() {
        assert_eq!(project_key(42), "42");
    }
}
