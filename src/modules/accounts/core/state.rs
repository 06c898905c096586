use crate::shared::core::primitives::{AccountId, Money};

// Account state after folding its events. Never stored, always rebuilt.
//
// Notes
// - limit is never positive once set through a command; the fold does not check it.
// - deleted is a soft marker. The history of a deleted account stays in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountState {
    pub account_id: AccountId,
    pub balance: Money,
    pub limit: Money,
    pub created: bool,
    pub deleted: bool,
}

impl AccountState {
    pub fn new(account_id: AccountId) -> Self {
        Self {
            account_id,
            balance: Money::ZERO,
            limit: Money::ZERO,
            created: false,
            deleted: false,
        }
    }

    pub fn exists(&self) -> bool {
        self.created && !self.deleted
    }
}
