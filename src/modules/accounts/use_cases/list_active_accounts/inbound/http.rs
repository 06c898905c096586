use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::modules::accounts::adapters::inbound::http::error_response;
use crate::shared::core::primitives::AccountId;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAccountsResponse {
    pub account_ids: Vec<AccountId>,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.accounts.list_active_account_ids().await {
        Ok(account_ids) => Json(ListAccountsResponse { account_ids }).into_response(),
        Err(error) => error_response(error),
    }
}
