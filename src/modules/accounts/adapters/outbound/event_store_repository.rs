// AccountEventRepository on top of the shared row store.
//
// Responsibilities
// - Map an AccountEvent to one row: stream = account id, key = event id, payload = encoded JSON.
// - Decode rows back in stream order and stop at the first row that does not decode.

use crate::modules::accounts::core::codec::{decode_payload, encode_payload};
use crate::modules::accounts::core::events::AccountEvent;
use crate::modules::accounts::core::ports::{AccountEventRepository, RepositoryError};
use crate::shared::core::primitives::{AccountId, EventId};
use crate::shared::infrastructure::event_store::{EventStore, StoredEvent};
use async_trait::async_trait;
use std::sync::Arc;

pub struct EventStoreAccountRepository<TEventStore>
where
    TEventStore: EventStore + ?Sized + 'static,
{
    event_store: Arc<TEventStore>,
}

impl<TEventStore> EventStoreAccountRepository<TEventStore>
where
    TEventStore: EventStore + ?Sized + 'static,
{
    pub fn new(event_store: Arc<TEventStore>) -> Self {
        Self { event_store }
    }
}

#[async_trait]
impl<TEventStore> AccountEventRepository for EventStoreAccountRepository<TEventStore>
where
    TEventStore: EventStore + ?Sized + 'static,
{
    async fn append(&self, event: &AccountEvent) -> Result<(), RepositoryError> {
        let payload =
            encode_payload(&event.payload).map_err(|source| RepositoryError::Serialization {
                event_id: event.event_id,
                source,
            })?;
        self.event_store
            .append(StoredEvent {
                stream_id: event.account_id.into_uuid(),
                event_id: event.event_id.into_uuid(),
                payload,
            })
            .await?;
        tracing::debug!(
            account_id = %event.account_id,
            event_id = %event.event_id,
            event_type = event.payload.event_type(),
            "account event appended"
        );
        Ok(())
    }

    async fn read_all(&self, account_id: AccountId) -> Result<Vec<AccountEvent>, RepositoryError> {
        let rows = self.event_store.read_stream(account_id.into_uuid()).await?;
        rows.into_iter()
            .map(|row| {
                let event_id = EventId::from(row.event_id);
                Ok(AccountEvent {
                    account_id: AccountId::from(row.stream_id),
                    event_id,
                    payload: decode_payload(event_id, &row.payload)?,
                })
            })
            .collect()
    }

    async fn list_account_ids(&self) -> Result<Vec<AccountId>, RepositoryError> {
        let stream_ids = self.event_store.list_stream_ids().await?;
        Ok(stream_ids.into_iter().map(AccountId::from).collect())
    }
}
