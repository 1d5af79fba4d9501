//! Input validation errors shared by project and task payloads.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection reasons for draft/patch payloads at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Task title is blank after trim.
    EmptyTitle,
    /// Task assignee is blank after trim.
    EmptyAssignee,
    /// Project name is blank after trim.
    EmptyProjectName,
    /// Column name is blank after trim.
    EmptyColumnName,
    /// Two columns of the same project share a name.
    DuplicateColumn(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title is required"),
            Self::EmptyAssignee => write!(f, "assignee is required"),
            Self::EmptyProjectName => write!(f, "project name is required"),
            Self::EmptyColumnName => write!(f, "column name must not be blank"),
            Self::DuplicateColumn(name) => write!(f, "duplicate column name: `{name}`"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_non_blank(value: &str, error: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(())
}
