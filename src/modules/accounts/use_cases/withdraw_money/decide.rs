// Pure decision for a withdrawal.
//
// Rules
// - The amount must not be negative.
// - The balance after the withdrawal must not drop below the limit. Reaching it exactly is fine.

use crate::modules::accounts::core::decision::DecideError;
use crate::modules::accounts::core::events::AccountEventPayload;
use crate::modules::accounts::core::state::AccountState;
use crate::shared::core::primitives::Money;

pub fn decide_withdraw(
    state: &AccountState,
    amount: Money,
) -> Result<AccountEventPayload, DecideError> {
    if amount < Money::ZERO {
        return Err(DecideError::NegativeWithdrawal { amount });
    }
    let Some(remaining) = state.balance.checked_sub(amount) else {
        return Err(DecideError::BalanceOutOfRange {
            amount,
            balance: state.balance,
        });
    };
    if remaining < state.limit {
        return Err(DecideError::LimitExceeded {
            amount,
            balance: state.balance,
            limit: state.limit,
        });
    }
    Ok(AccountEventPayload::MoneyWithdrawn { amount })
}
