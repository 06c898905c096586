// Ports the account core needs from the outside world.
//
// Purpose
// - Describe the account event log as a trait so the aggregate never touches a database.
//
// Contract
// - append persists exactly one event under (account_id, event_id). Failures surface as is.
// - read_all returns the whole history of an account, ascending by event id.
//   An unknown account has an empty history, not an error.
// - list_account_ids returns every account with at least one event, deleted ones included.

use crate::modules::accounts::core::codec::DeserializationError;
use crate::modules::accounts::core::events::AccountEvent;
use crate::shared::core::primitives::{AccountId, EventId};
use crate::shared::infrastructure::event_store::EventStoreError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Store(#[from] EventStoreError),

    #[error("event {event_id} could not be serialized: {source}")]
    Serialization {
        event_id: EventId,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Deserialization(#[from] DeserializationError),
}

#[async_trait]
pub trait AccountEventRepository: Send + Sync {
    async fn append(&self, event: &AccountEvent) -> Result<(), RepositoryError>;
    async fn read_all(&self, account_id: AccountId) -> Result<Vec<AccountEvent>, RepositoryError>;
    async fn list_account_ids(&self) -> Result<Vec<AccountId>, RepositoryError>;
}
