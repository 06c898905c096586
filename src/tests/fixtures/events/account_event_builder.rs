// Shared test fixture: builds an ordered account history.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::accounts::core::events::{AccountEvent, AccountEventPayload};
use crate::shared::core::primitives::{AccountId, Money};

pub struct AccountHistoryBuilder {
    account_id: AccountId,
    events: Vec<AccountEvent>,
}

#[allow(dead_code)]
impl AccountHistoryBuilder {
    pub fn new(account_id: AccountId) -> Self {
        Self {
            account_id,
            events: Vec::new(),
        }
    }

    pub fn created(self) -> Self {
        self.push(AccountEventPayload::Created)
    }

    pub fn deleted(self) -> Self {
        self.push(AccountEventPayload::Deleted)
    }

    pub fn deposited(self, amount: Money) -> Self {
        self.push(AccountEventPayload::MoneyDeposited { amount })
    }

    pub fn withdrawn(self, amount: Money) -> Self {
        self.push(AccountEventPayload::MoneyWithdrawn { amount })
    }

    pub fn limit_set(self, limit: Money) -> Self {
        self.push(AccountEventPayload::LimitSet { limit })
    }

    pub fn build(self) -> Vec<AccountEvent> {
        self.events
    }

    fn push(mut self, payload: AccountEventPayload) -> Self {
        self.events.push(AccountEvent::record(self.account_id, payload));
        self
    }
}

#[cfg(test)]
mod account_history_builder_tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    fn it_should_build_an_ordered_history_for_one_account() {
        let account_id = AccountId::generate();
        let history = AccountHistoryBuilder::new(account_id)
            .created()
            .deposited(dec!(1))
            .deleted()
            .build();
        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|event| event.account_id == account_id));
        assert!(history.windows(2).all(|pair| pair[0].event_id < pair[1].event_id));
        assert_eq!(history[1].payload, AccountEventPayload::MoneyDeposited { amount: dec!(1) });
    }
}
