use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::accounts::adapters::inbound::http::{error_response, parse_account_id};
use crate::shared::core::primitives::Money;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct WithdrawMoneyBody {
    pub amount: Money,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    body: Result<Json<WithdrawMoneyBody>, JsonRejection>,
) -> impl IntoResponse {
    let account_id = match parse_account_id(&account_id) {
        Ok(account_id) => account_id,
        Err(response) => return response,
    };
    let Ok(Json(body)) = body else {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    };
    let mut account = match state.accounts.get_account(account_id).await {
        Ok(account) => account,
        Err(error) => return error_response(error),
    };
    match account.withdraw(body.amount).await {
        Ok(_) => StatusCode::ACCEPTED.into_response(),
        Err(error) => error_response(error),
    }
}
