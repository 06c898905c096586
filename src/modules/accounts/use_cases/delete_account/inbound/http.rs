use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::accounts::adapters::inbound::http::{error_response, parse_account_id};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> impl IntoResponse {
    let account_id = match parse_account_id(&account_id) {
        Ok(account_id) => account_id,
        Err(response) => return response,
    };
    let mut account = match state.accounts.get_account(account_id).await {
        Ok(account) => account,
        Err(error) => return error_response(error),
    };
    match account.delete().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
