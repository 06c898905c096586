// Pure decision for a deposit: any non-negative amount the balance can still hold.

use crate::modules::accounts::core::decision::DecideError;
use crate::modules::accounts::core::events::AccountEventPayload;
use crate::modules::accounts::core::state::AccountState;
use crate::shared::core::primitives::Money;

pub fn decide_deposit(
    state: &AccountState,
    amount: Money,
) -> Result<AccountEventPayload, DecideError> {
    if amount < Money::ZERO {
        return Err(DecideError::NegativeDeposit { amount });
    }
    if state.balance.checked_add(amount).is_none() {
        return Err(DecideError::BalanceOutOfRange {
            amount,
            balance: state.balance,
        });
    }
    Ok(AccountEventPayload::MoneyDeposited { amount })
}
