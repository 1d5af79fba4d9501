//! Storage interface for identity-keyed records.
//!
//! # Responsibility
//! - Define the async CRUD contract every backing store must honor.
//! - Define the latency profile used to model storage round-trips.
//!
//! # Invariants
//! - Identity is assigned by the store: one more than the highest identity
//!   the store has ever held, starting at 1. Deleted identities are not reused.
//! - Every returned record is an owned copy; callers cannot reach stored state.
//! - Every operation is async and may suspend before touching state.

pub mod memory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::time::Duration;

pub use memory::InMemoryStore;

/// Numeric record identity.
pub type RecordId = u64;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with this identity exists.
    NotFound(RecordId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// A record kept by a [`RecordStore`].
///
/// The store owns identity and timestamps; the record type owns how a create
/// payload becomes a record and how an update payload merges into one.
pub trait Record: Clone + Send + Sync + 'static {
    /// Create payload.
    type Draft: Send;
    /// Merge-update payload.
    type Patch: Send;

    /// Entity name used in errors and log events.
    const KIND: &'static str;

    fn id(&self) -> RecordId;

    /// Builds a new record with store-assigned identity and creation time.
    fn from_draft(id: RecordId, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Merges supplied patch fields and refreshes the update timestamp.
    ///
    /// Must not change `id()`.
    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

/// Async CRUD contract over one record collection.
pub trait RecordStore<T: Record>: Send + Sync {
    /// Returns all records in insertion order.
    fn list(&self) -> impl Future<Output = StoreResult<Vec<T>>> + Send;

    /// Returns records matching `predicate`, in insertion order.
    fn select<P>(&self, predicate: P) -> impl Future<Output = StoreResult<Vec<T>>> + Send
    where
        P: Fn(&T) -> bool + Send;

    fn get(&self, id: RecordId) -> impl Future<Output = StoreResult<T>> + Send;

    /// Stores a new record and returns it with its assigned identity.
    fn create(&self, draft: T::Draft) -> impl Future<Output = StoreResult<T>> + Send;

    /// Merges `patch` into the record; identity is preserved.
    fn update(&self, id: RecordId, patch: T::Patch)
        -> impl Future<Output = StoreResult<T>> + Send;

    fn delete(&self, id: RecordId) -> impl Future<Output = StoreResult<()>> + Send;
}

/// Store operation kinds, used to pick a simulated delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    List,
    Select,
    Get,
    Create,
    Update,
    Delete,
}

impl StoreOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Select => "select",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Simulated per-operation latency in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LatencyProfile {
    pub list_ms: u64,
    pub select_ms: u64,
    pub get_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
}

impl LatencyProfile {
    /// Profile with no delay at all; intended for tests and batch tools.
    pub const fn instant() -> Self {
        Self {
            list_ms: 0,
            select_ms: 0,
            get_ms: 0,
            create_ms: 0,
            update_ms: 0,
            delete_ms: 0,
        }
    }

    pub fn delay(&self, op: StoreOp) -> Duration {
        let millis = match op {
            StoreOp::List => self.list_ms,
            StoreOp::Select => self.select_ms,
            StoreOp::Get => self.get_ms,
            StoreOp::Create => self.create_ms,
            StoreOp::Update => self.update_ms,
            StoreOp::Delete => self.delete_ms,
        };
        Duration::from_millis(millis)
    }
}

impl Default for LatencyProfile {
    /// Round-trip times of the mock network layer this board was built on.
    fn default() -> Self {
        Self {
            list_ms: 300,
            select_ms: 250,
            get_ms: 200,
            create_ms: 400,
            update_ms: 350,
            delete_ms: 250,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LatencyProfile, StoreOp};
    use std::time::Duration;

    #[test]
    fn default_profile_matches_mock_round_trips() {
        let profile = LatencyProfile::default();
        assert_eq!(profile.delay(StoreOp::Create), Duration::from_millis(400));
        assert_eq!(profile.delay(StoreOp::Select), Duration::from_millis(250));
    }

    #[test]
    fn instant_profile_never_sleeps() {
        let profile = LatencyProfile::instant();
        for op in [
            StoreOp::List,
            StoreOp::Select,
            StoreOp::Get,
            StoreOp::Create,
            StoreOp::Update,
            StoreOp::Delete,
        ] {
            assert_eq!(profile.delay(op), Duration::ZERO);
        }
    }
}
