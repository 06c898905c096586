// Account aggregate: folded state plus the repository it records into.
//
// Flow of a command
// - decide against the current state (pure, no input or output)
// - append the resulting event
// - apply the same event locally
//
// A rejected command or a failed append leaves both the log and the local state untouched.
// Nothing guards against another writer appending between reconstruction and append.

use crate::modules::accounts::application::errors::ApplicationError;
use crate::modules::accounts::core::decision::DecideError;
use crate::modules::accounts::core::events::{AccountEvent, AccountEventPayload};
use crate::modules::accounts::core::evolve::{apply, fold};
use crate::modules::accounts::core::ports::AccountEventRepository;
use crate::modules::accounts::core::state::AccountState;
use crate::modules::accounts::use_cases::deposit_money::decide::decide_deposit;
use crate::modules::accounts::use_cases::set_limit::decide::decide_set_limit;
use crate::modules::accounts::use_cases::withdraw_money::decide::decide_withdraw;
use crate::shared::core::primitives::{AccountId, Money};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct Account<TRepository>
where
    TRepository: AccountEventRepository + 'static,
{
    state: AccountState,
    repository: Arc<TRepository>,
}

impl<TRepository> Account<TRepository>
where
    TRepository: AccountEventRepository + 'static,
{
    /// Rebuilds the account from its full history.
    ///
    /// An empty history, a history without a creation and a deleted account all
    /// come back as `AccountNotFound`.
    #[tracing::instrument(skip(repository))]
    pub async fn reconstruct(
        repository: Arc<TRepository>,
        account_id: AccountId,
    ) -> Result<Self, ApplicationError> {
        let events = repository.read_all(account_id).await?;
        if events.is_empty() {
            return Err(ApplicationError::AccountNotFound(account_id));
        }
        let state = fold(account_id, &events)?;
        if !state.exists() {
            return Err(ApplicationError::AccountNotFound(account_id));
        }
        debug!(events = events.len(), "account reconstructed");
        Ok(Self { state, repository })
    }

    pub fn id(&self) -> AccountId {
        self.state.account_id
    }

    pub fn balance(&self) -> Money {
        self.state.balance
    }

    pub fn limit(&self) -> Money {
        self.state.limit
    }

    pub fn state(&self) -> &AccountState {
        &self.state
    }

    #[tracing::instrument(skip(self), fields(account_id = %self.state.account_id))]
    pub async fn deposit(&mut self, amount: Money) -> Result<Money, ApplicationError> {
        self.ensure_exists()?;
        let payload =
            decide_deposit(&self.state, amount).map_err(|reason| self.rejected(reason))?;
        self.record(payload).await?;
        info!(%amount, balance = %self.state.balance, "money deposited");
        Ok(self.state.balance)
    }

    #[tracing::instrument(skip(self), fields(account_id = %self.state.account_id))]
    pub async fn withdraw(&mut self, amount: Money) -> Result<Money, ApplicationError> {
        self.ensure_exists()?;
        let payload =
            decide_withdraw(&self.state, amount).map_err(|reason| self.rejected(reason))?;
        self.record(payload).await?;
        info!(%amount, balance = %self.state.balance, "money withdrawn");
        Ok(self.state.balance)
    }

    #[tracing::instrument(skip(self), fields(account_id = %self.state.account_id))]
    pub async fn set_limit(&mut self, limit: Money) -> Result<Money, ApplicationError> {
        self.ensure_exists()?;
        let payload =
            decide_set_limit(&self.state, limit).map_err(|reason| self.rejected(reason))?;
        self.record(payload).await?;
        info!(%limit, "limit set");
        Ok(self.state.limit)
    }

    /// Soft delete. The history stays, later reads report the account as not found.
    ///
    /// A handle from `reconstruct` always exists, so the only refusal is a second
    /// delete on the same handle.
    #[tracing::instrument(skip(self), fields(account_id = %self.state.account_id))]
    pub async fn delete(&mut self) -> Result<(), ApplicationError> {
        self.ensure_exists()?;
        self.record(AccountEventPayload::Deleted).await?;
        info!("account deleted");
        Ok(())
    }

    fn ensure_exists(&self) -> Result<(), ApplicationError> {
        if !self.state.exists() {
            return Err(ApplicationError::AccountNotFound(self.state.account_id));
        }
        Ok(())
    }

    fn rejected(&self, reason: DecideError) -> ApplicationError {
        warn!(account_id = %self.state.account_id, %reason, "command rejected");
        ApplicationError::Domain(reason)
    }

    async fn record(&mut self, payload: AccountEventPayload) -> Result<(), ApplicationError> {
        let event = AccountEvent::record(self.state.account_id, payload);
        self.repository.append(&event).await?;
        self.state = apply(self.state.clone(), &event)?;
        Ok(())
    }
}
