// Account directory: opens accounts and answers which ones currently exist.
//
// Every read goes back to the event log. The service keeps no account state of its own.

use crate::modules::accounts::application::account::Account;
use crate::modules::accounts::application::errors::ApplicationError;
use crate::modules::accounts::core::events::{AccountEvent, AccountEventPayload};
use crate::modules::accounts::core::ports::AccountEventRepository;
use crate::shared::core::primitives::AccountId;
use std::sync::Arc;
use tracing::info;

pub struct AccountService<TRepository>
where
    TRepository: AccountEventRepository + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> AccountService<TRepository>
where
    TRepository: AccountEventRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Records a creation event under a fresh id and returns the account rebuilt from it.
    #[tracing::instrument(skip(self))]
    pub async fn create_account(&self) -> Result<Account<TRepository>, ApplicationError> {
        let created = AccountEvent::record(AccountId::generate(), AccountEventPayload::Created);
        self.repository.append(&created).await?;
        info!(account_id = %created.account_id, "account opened");
        self.get_account(created.account_id).await
    }

    pub async fn get_account(
        &self,
        account_id: AccountId,
    ) -> Result<Account<TRepository>, ApplicationError> {
        Account::reconstruct(self.repository.clone(), account_id).await
    }

    /// Ids of accounts that are created and not deleted.
    ///
    /// Candidates that turn out not to exist are skipped. Any other failure aborts the listing.
    #[tracing::instrument(skip(self))]
    pub async fn list_active_account_ids(&self) -> Result<Vec<AccountId>, ApplicationError> {
        let candidates = self.repository.list_account_ids().await?;
        let mut active = Vec::with_capacity(candidates.len());
        for account_id in candidates {
            match self.get_account(account_id).await {
                Ok(_) => active.push(account_id),
                Err(ApplicationError::AccountNotFound(_)) => continue,
                Err(error) => return Err(error),
            }
        }
        Ok(active)
    }
}
