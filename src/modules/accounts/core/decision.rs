use crate::shared::core::primitives::Money;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DecideError {
    #[error("a negative amount {amount} can not be deposited")]
    NegativeDeposit { amount: Money },

    #[error("a negative amount {amount} can not be withdrawn")]
    NegativeWithdrawal { amount: Money },

    #[error("withdrawing {amount} from balance {balance} would exceed the limit {limit}")]
    LimitExceeded {
        amount: Money,
        balance: Money,
        limit: Money,
    },

    #[error("new limit {limit} can not be positive")]
    PositiveLimit { limit: Money },

    #[error("new limit {limit} can not be set as balance {balance} would be below it")]
    BalanceBelowLimit { limit: Money, balance: Money },

    #[error("moving {amount} on balance {balance} leaves the representable range")]
    BalanceOutOfRange { amount: Money, balance: Money },
}
