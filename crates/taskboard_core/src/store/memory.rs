//! In-memory record store with simulated latency.
//!
//! # Responsibility
//! - Keep one record collection for the lifetime of the store instance.
//! - Sleep for the configured delay before every operation.
//!
//! # Invariants
//! - `last_id` only grows; it starts at the highest seeded identity.
//! - Records are cloned on the way in and on the way out.

use crate::store::{
    LatencyProfile, Record, RecordId, RecordStore, StoreError, StoreOp, StoreResult,
};
use chrono::Utc;
use log::{debug, trace};
use tokio::sync::Mutex;

struct StoreState<T> {
    records: Vec<T>,
    last_id: RecordId,
}

/// Process-local store. Construct one per board session (or per test) and
/// inject it into a repository; there is no shared global instance.
pub struct InMemoryStore<T> {
    state: Mutex<StoreState<T>>,
    latency: LatencyProfile,
}

impl<T: Record> InMemoryStore<T> {
    /// Creates an empty store.
    pub fn new(latency: LatencyProfile) -> Self {
        Self::with_records(Vec::new(), latency)
    }

    /// Creates a store seeded with existing records, kept in the given order.
    ///
    /// Identity assignment continues after the highest seeded identity.
    pub fn with_records(records: Vec<T>, latency: LatencyProfile) -> Self {
        let last_id = records.iter().map(T::id).max().unwrap_or(0);
        Self {
            state: Mutex::new(StoreState { records, last_id }),
            latency,
        }
    }

    async fn pause(&self, op: StoreOp) {
        let delay = self.latency.delay(op);
        if !delay.is_zero() {
            trace!(
                "event=store_wait module=store op={} delay_ms={}",
                op.as_str(),
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }
    }
}

impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    async fn list(&self) -> StoreResult<Vec<T>> {
        self.pause(StoreOp::List).await;
        let state = self.state.lock().await;
        Ok(state.records.clone())
    }

    async fn select<P>(&self, predicate: P) -> StoreResult<Vec<T>>
    where
        P: Fn(&T) -> bool + Send,
    {
        self.pause(StoreOp::Select).await;
        let state = self.state.lock().await;
        Ok(state
            .records
            .iter()
            .filter(|record| predicate(*record))
            .cloned()
            .collect())
    }

    async fn get(&self, id: RecordId) -> StoreResult<T> {
        self.pause(StoreOp::Get).await;
        let state = self.state.lock().await;
        state
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, draft: T::Draft) -> StoreResult<T> {
        self.pause(StoreOp::Create).await;
        let mut state = self.state.lock().await;
        let id = state.last_id + 1;
        let record = T::from_draft(id, draft, Utc::now());
        state.last_id = id;
        state.records.push(record.clone());
        debug!(
            "event=record_create module=store status=ok kind={} id={id}",
            T::KIND
        );
        Ok(record)
    }

    async fn update(&self, id: RecordId, patch: T::Patch) -> StoreResult<T> {
        self.pause(StoreOp::Update).await;
        let mut state = self.state.lock().await;
        let record = state
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        record.apply_patch(patch, Utc::now());
        debug_assert_eq!(record.id(), id, "patch must not change identity");
        debug!(
            "event=record_update module=store status=ok kind={} id={id}",
            T::KIND
        );
        Ok(record.clone())
    }

    async fn delete(&self, id: RecordId) -> StoreResult<()> {
        self.pause(StoreOp::Delete).await;
        let mut state = self.state.lock().await;
        let index = state
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        state.records.remove(index);
        debug!(
            "event=record_delete module=store status=ok kind={} id={id}",
            T::KIND
        );
        Ok(())
    }
}
