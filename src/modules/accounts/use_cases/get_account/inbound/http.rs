use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::accounts::adapters::inbound::http::{error_response, parse_account_id};
use crate::shared::core::primitives::{AccountId, Money};
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountResponse {
    pub account_id: AccountId,
    pub limit: Money,
    pub balance: Money,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> impl IntoResponse {
    let account_id = match parse_account_id(&account_id) {
        Ok(account_id) => account_id,
        Err(response) => return response,
    };
    match state.accounts.get_account(account_id).await {
        Ok(account) => Json(GetAccountResponse {
            account_id: account.id(),
            limit: account.limit(),
            balance: account.balance(),
        })
        .into_response(),
        Err(error) => error_response(error),
    }
}
