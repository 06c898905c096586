// In memory implementation of the EventStore port.
//
// Purpose
// - Back the service locally and in tests without a database.
//
// Responsibilities
// - Keep one ordered partition per stream.
// - Refuse to overwrite an existing (stream_id, event_id) row.

use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, StoredEvent};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryEventStore {
    partitions: RwLock<BTreeMap<Uuid, BTreeMap<Uuid, StoredEvent>>>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(&self, event: StoredEvent) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        let mut partitions = self.partitions.write().await;
        let partition = partitions.entry(event.stream_id).or_default();
        if partition.contains_key(&event.event_id) {
            return Err(EventStoreError::DuplicateEvent {
                stream_id: event.stream_id,
                event_id: event.event_id,
            });
        }
        partition.insert(event.event_id, event);
        Ok(())
    }

    async fn read_stream(&self, stream_id: Uuid) -> Result<Vec<StoredEvent>, EventStoreError> {
        self.ensure_online()?;
        let partitions = self.partitions.read().await;
        Ok(partitions
            .get(&stream_id)
            .map(|partition| partition.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn list_stream_ids(&self) -> Result<Vec<Uuid>, EventStoreError> {
        self.ensure_online()?;
        let partitions = self.partitions.read().await;
        Ok(partitions.keys().copied().collect())
    }
}
