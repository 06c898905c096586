// Evolve: fold account events into account state.
//
// Boundaries
// - No input or output. No validation of amounts or limits: history replays as recorded,
//   even if a command rule has been tightened since.
// - Checks: the event belongs to the account being folded, and the balance stays
//   representable. Both failures mean the stored history is corrupt.

use crate::modules::accounts::core::events::{AccountEvent, AccountEventPayload};
use crate::modules::accounts::core::state::AccountState;
use crate::shared::core::primitives::{AccountId, EventId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvolveError {
    #[error("event {event_id} belongs to account {actual}, not to account {expected}")]
    MismatchedAccount {
        expected: AccountId,
        actual: AccountId,
        event_id: EventId,
    },

    #[error("event {event_id} moves the balance of account {account_id} out of range")]
    BalanceOutOfRange {
        account_id: AccountId,
        event_id: EventId,
    },
}

pub fn apply(state: AccountState, event: &AccountEvent) -> Result<AccountState, EvolveError> {
    if event.account_id != state.account_id {
        return Err(EvolveError::MismatchedAccount {
            expected: state.account_id,
            actual: event.account_id,
            event_id: event.event_id,
        });
    }
    let (account_id, event_id) = (state.account_id, event.event_id);
    let out_of_range = move || EvolveError::BalanceOutOfRange {
        account_id,
        event_id,
    };
    let mut next = state;
    match &event.payload {
        AccountEventPayload::Created => next.created = true,
        AccountEventPayload::Deleted => next.deleted = true,
        AccountEventPayload::MoneyDeposited { amount } => {
            next.balance = next.balance.checked_add(*amount).ok_or_else(out_of_range)?;
        }
        AccountEventPayload::MoneyWithdrawn { amount } => {
            next.balance = next.balance.checked_sub(*amount).ok_or_else(out_of_range)?;
        }
        AccountEventPayload::LimitSet { limit } => next.limit = *limit,
    }
    Ok(next)
}

/// Folds an ordered history, starting from the blank state of `account_id`.
pub fn fold<'a, I>(account_id: AccountId, events: I) -> Result<AccountState, EvolveError>
where
    I: IntoIterator<Item = &'a AccountEvent>,
{
    events
        .into_iter()
        .try_fold(AccountState::new(account_id), |state, event| apply(state, event))
}
