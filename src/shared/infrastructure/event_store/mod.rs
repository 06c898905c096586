// Row level port for the append-only event table.
//
// Layout
// - One partition per stream (an account), rows keyed by (stream_id, event_id).
// - event_id is the ordering key inside a partition.
// - payload is opaque to the store. Serialization belongs to the module that owns the events.
//
// The store never reorders, merges or drops rows. Failures are surfaced as they happen,
// there is no retry at this level.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventStoreError {
    #[error("event {event_id} is already stored in stream {stream_id}")]
    DuplicateEvent { stream_id: Uuid, event_id: Uuid },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEvent {
    pub stream_id: Uuid,
    pub event_id: Uuid,
    pub payload: Vec<u8>,
}

#[async_trait]
pub trait EventStore: Send + Sync {
    async fn append(&self, event: StoredEvent) -> Result<(), EventStoreError>;

    /// Every row of the stream in ascending event id order. Unknown streams are empty.
    async fn read_stream(&self, stream_id: Uuid) -> Result<Vec<StoredEvent>, EventStoreError>;

    /// Distinct ids of all streams holding at least one row.
    async fn list_stream_ids(&self) -> Result<Vec<Uuid>, EventStoreError>;
}

pub mod in_memory;
pub mod postgres;
