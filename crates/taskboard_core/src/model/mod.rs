//! Board domain model.
//!
//! # Responsibility
//! - Define canonical records (`Project`, `Task`) and their write payloads.
//! - Keep input validation rules next to the shapes they validate.
//!
//! # Invariants
//! - Record identity is assigned by the store and never changed by a patch.
//! - A task refers to its project through the string key from
//!   [`project::project_key`], never through an implicit numeric coercion.

pub mod project;
pub mod task;
pub mod validation;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Deserializes a field where "absent" and "explicit null" mean different
/// things: absent keeps the stored value, `null` clears it.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Parses a due date written as `YYYY-MM-DD` or as an RFC 3339 timestamp.
///
/// For a timestamp the calendar day as written is kept; the time of day and
/// offset are dropped.
pub(crate) fn parse_due_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| format!("invalid due date `{trimmed}`; expected YYYY-MM-DD or RFC 3339"))
}

pub(crate) fn optional_due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_due_date(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

/// [`double_option`] for due dates.
pub(crate) fn patch_due_date<'de, D>(
    deserializer: D,
) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_due_date(deserializer).map(Some)
}
