// Pure decision for a new overdraft limit.
//
// Rules
// - A limit is never positive.
// - The current balance must already satisfy the new limit.

use crate::modules::accounts::core::decision::DecideError;
use crate::modules::accounts::core::events::AccountEventPayload;
use crate::modules::accounts::core::state::AccountState;
use crate::shared::core::primitives::Money;

pub fn decide_set_limit(
    state: &AccountState,
    limit: Money,
) -> Result<AccountEventPayload, DecideError> {
    if limit > Money::ZERO {
        return Err(DecideError::PositiveLimit { limit });
    }
    if state.balance < limit {
        return Err(DecideError::BalanceBelowLimit {
            limit,
            balance: state.balance,
        });
    }
    Ok(AccountEventPayload::LimitSet { limit })
}
