// Account events: the only persisted truth about an account.
//
// Versioning and evolution
// - Events are facts. Do not change the meaning of a recorded event type.
// - The eventType tag is part of the stored payload, renaming a variant breaks replay.

use crate::shared::core::primitives::{AccountId, EventId, Money};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "eventType", rename_all = "camelCase")]
pub enum AccountEventPayload {
    Created,
    Deleted,
    MoneyDeposited { amount: Money },
    MoneyWithdrawn { amount: Money },
    LimitSet { limit: Money },
}

impl AccountEventPayload {
    pub const CREATED: &'static str = "created";
    pub const DELETED: &'static str = "deleted";
    pub const MONEY_DEPOSITED: &'static str = "moneyDeposited";
    pub const MONEY_WITHDRAWN: &'static str = "moneyWithdrawn";
    pub const LIMIT_SET: &'static str = "limitSet";

    pub fn event_type(&self) -> &'static str {
        match self {
            AccountEventPayload::Created => Self::CREATED,
            AccountEventPayload::Deleted => Self::DELETED,
            AccountEventPayload::MoneyDeposited { .. } => Self::MONEY_DEPOSITED,
            AccountEventPayload::MoneyWithdrawn { .. } => Self::MONEY_WITHDRAWN,
            AccountEventPayload::LimitSet { .. } => Self::LIMIT_SET,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountEvent {
    pub account_id: AccountId,
    pub event_id: EventId,
    pub payload: AccountEventPayload,
}

impl AccountEvent {
    /// Stamps the payload with a fresh event id.
    pub fn record(account_id: AccountId, payload: AccountEventPayload) -> Self {
        Self {
            account_id,
            event_id: EventId::generate(),
            payload,
        }
    }
}
