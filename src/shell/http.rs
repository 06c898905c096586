use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::accounts::use_cases::delete_account::inbound::http as delete_http;
use crate::modules::accounts::use_cases::deposit_money::inbound::http as deposit_http;
use crate::modules::accounts::use_cases::get_account::inbound::http as get_http;
use crate::modules::accounts::use_cases::list_active_accounts::inbound::http as list_http;
use crate::modules::accounts::use_cases::open_account::inbound::http as open_http;
use crate::modules::accounts::use_cases::set_limit::inbound::http as limit_http;
use crate::modules::accounts::use_cases::withdraw_money::inbound::http as withdraw_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/accounts",
            get(list_http::handle).post(open_http::handle),
        )
        .route(
            "/api/accounts/{id}",
            get(get_http::handle).delete(delete_http::handle),
        )
        .route("/api/accounts/{id}/deposit", post(deposit_http::handle))
        .route("/api/accounts/{id}/withdraw", post(withdraw_http::handle))
        .route("/api/accounts/{id}/limit", put(limit_http::handle))
        .with_state(state)
}
