// Payload codec for account events.
//
// Wire shape
// - A JSON object with an `eventType` discriminator and only the fields of that variant.
// - Decimals are written as strings. Reads also accept JSON numbers, which is how
//   older payloads carry them.
//
// Decoding never guesses: an unknown tag or a missing or mistyped field is an error
// naming the event and the field.

use crate::modules::accounts::core::events::AccountEventPayload;
use crate::shared::core::primitives::{EventId, Money};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub const EVENT_TYPE_FIELD: &str = "eventType";
pub const AMOUNT_FIELD: &str = "amount";
pub const LIMIT_FIELD: &str = "limit";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("payload is not a JSON object: {0}")]
    Malformed(String),

    #[error("field `{field}` is not set")]
    MissingField { field: &'static str },

    #[error("field `{field}` has an invalid value {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("`{0}` is not a known event type")]
    UnknownEventType(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("event {event_id}: {reason}")]
pub struct DeserializationError {
    pub event_id: EventId,
    pub reason: PayloadError,
}

pub fn encode_payload(payload: &AccountEventPayload) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(payload)
}

pub fn decode_payload(
    event_id: EventId,
    bytes: &[u8],
) -> Result<AccountEventPayload, DeserializationError> {
    parse(bytes).map_err(|reason| DeserializationError { event_id, reason })
}

fn parse(bytes: &[u8]) -> Result<AccountEventPayload, PayloadError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| PayloadError::Malformed(e.to_string()))?;
    let object = match value {
        Value::Object(object) => object,
        other => return Err(PayloadError::Malformed(format!("found {other}"))),
    };
    let event_type = match object.get(EVENT_TYPE_FIELD) {
        Some(Value::String(event_type)) => event_type.as_str(),
        Some(other) => {
            return Err(PayloadError::InvalidField {
                field: EVENT_TYPE_FIELD,
                value: other.to_string(),
            });
        }
        None => {
            return Err(PayloadError::MissingField {
                field: EVENT_TYPE_FIELD,
            });
        }
    };
    match event_type {
        AccountEventPayload::CREATED => Ok(AccountEventPayload::Created),
        AccountEventPayload::DELETED => Ok(AccountEventPayload::Deleted),
        AccountEventPayload::MONEY_DEPOSITED => Ok(AccountEventPayload::MoneyDeposited {
            amount: money_field(&object, AMOUNT_FIELD)?,
        }),
        AccountEventPayload::MONEY_WITHDRAWN => Ok(AccountEventPayload::MoneyWithdrawn {
            amount: money_field(&object, AMOUNT_FIELD)?,
        }),
        AccountEventPayload::LIMIT_SET => Ok(AccountEventPayload::LimitSet {
            limit: money_field(&object, LIMIT_FIELD)?,
        }),
        unknown => Err(PayloadError::UnknownEventType(unknown.to_string())),
    }
}

fn money_field(object: &Map<String, Value>, field: &'static str) -> Result<Money, PayloadError> {
    let value = object
        .get(field)
        .ok_or(PayloadError::MissingField { field })?;
    match value {
        Value::String(_) | Value::Number(_) => {
            <Money as Deserialize>::deserialize(value).map_err(|_| PayloadError::InvalidField {
                field,
                value: value.to_string(),
            })
        }
        _ => Err(PayloadError::InvalidField {
            field,
            value: value.to_string(),
        }),
    }
}
