// Shared test fixture: an AccountEventRepository with a scripted history.
//
// - read_all returns whatever history was seeded for the id, foreign events included.
// - appended events are recorded separately and joined onto the history.
// - appends can be switched to fail after seeding.

use crate::modules::accounts::core::events::AccountEvent;
use crate::modules::accounts::core::ports::{AccountEventRepository, RepositoryError};
use crate::shared::core::primitives::AccountId;
use crate::shared::infrastructure::event_store::EventStoreError;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct StubAccountRepository {
    histories: Mutex<BTreeMap<AccountId, Vec<AccountEvent>>>,
    appended: Mutex<Vec<AccountEvent>>,
    failing_appends: AtomicBool,
}

#[allow(dead_code)]
impl StubAccountRepository {
    /// Seeds the history under the account id of its first event.
    pub fn with_history(history: Vec<AccountEvent>) -> Self {
        let stub = Self::default();
        if let Some(first) = history.first() {
            stub.histories
                .try_lock()
                .expect("fresh stub is unlocked")
                .insert(first.account_id, history);
        }
        stub
    }

    pub async fn seed(&self, account_id: AccountId, history: Vec<AccountEvent>) {
        self.histories.lock().await.insert(account_id, history);
    }

    pub fn fail_appends(&self) {
        self.failing_appends.store(true, Ordering::SeqCst);
    }

    pub async fn appended(&self) -> Vec<AccountEvent> {
        self.appended.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl AccountEventRepository for StubAccountRepository {
    async fn append(&self, event: &AccountEvent) -> Result<(), RepositoryError> {
        if self.failing_appends.load(Ordering::SeqCst) {
            return Err(EventStoreError::Backend("append rejected".into()).into());
        }
        self.histories
            .lock()
            .await
            .entry(event.account_id)
            .or_default()
            .push(event.clone());
        self.appended.lock().await.push(event.clone());
        Ok(())
    }

    async fn read_all(&self, account_id: AccountId) -> Result<Vec<AccountEvent>, RepositoryError> {
        Ok(self
            .histories
            .lock()
            .await
            .get(&account_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_account_ids(&self) -> Result<Vec<AccountId>, RepositoryError> {
        Ok(self.histories.lock().await.keys().copied().collect())
    }
}
