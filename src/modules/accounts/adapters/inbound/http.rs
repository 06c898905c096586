// Shared pieces of the account HTTP handlers.
//
// Status mapping
// - AccountNotFound -> 404
// - Domain          -> 400
// - anything else   -> 500, logged, the body only says that something went wrong

use crate::modules::accounts::application::errors::ApplicationError;
use crate::shared::core::primitives::AccountId;
use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

fn with_message(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { message })).into_response()
}

pub fn parse_account_id(raw: &str) -> Result<AccountId, Response> {
    raw.parse()
        .map_err(|_| with_message(StatusCode::BAD_REQUEST, format!("{raw} is not a valid id")))
}

pub fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::AccountNotFound(_) => {
            with_message(StatusCode::NOT_FOUND, error.to_string())
        }
        ApplicationError::Domain(_) => with_message(StatusCode::BAD_REQUEST, error.to_string()),
        ApplicationError::History(_) | ApplicationError::Repository(_) => {
            tracing::error!(%error, "account request failed");
            with_message(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}
