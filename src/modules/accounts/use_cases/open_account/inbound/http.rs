use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::modules::accounts::adapters::inbound::http::error_response;
use crate::shared::core::primitives::AccountId;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAccountResponse {
    pub account_id: AccountId,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.accounts.create_account().await {
        Ok(account) => (
            StatusCode::CREATED,
            Json(OpenAccountResponse {
                account_id: account.id(),
            }),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}
