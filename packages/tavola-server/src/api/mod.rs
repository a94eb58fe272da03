use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tavola_core::error::StoreError;

mod cards;
mod lists;

#[cfg(test)]
mod test_support;

use crate::state::AppState;

/// Axum REST API routes.
///
///   GET    /lists                            -> all lists (without card data)
///   POST   /lists                            -> create a list
///   GET    /lists/:listId                    -> full list including cards
///   PUT    /lists/:listId                    -> update list fields
///   DELETE /lists/:listId                    -> delete list and its cards
///   GET    /lists/:listId/cards              -> all cards of a list
///   POST   /lists/:listId/cards              -> create a card in a list
///   PUT    /lists/:listId/cards/:cardId      -> update card fields
///   DELETE /lists/:listId/cards/:cardId      -> delete a card
///   GET    /status                           -> health check
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/lists", get(lists::get_lists).post(lists::add_list))
        .route(
            "/lists/{list_id}",
            get(lists::get_list)
                .put(lists::update_list)
                .delete(lists::delete_list),
        )
        .route(
            "/lists/{list_id}/cards",
            get(cards::get_cards).post(cards::add_card),
        )
        .route(
            "/lists/{list_id}/cards/{card_id}",
            axum::routing::put(cards::update_card).delete(cards::delete_card),
        )
        .route("/status", get(status))
}

pub async fn status(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "running",
        "port": state.port,
        "bind_address": state.bind_address,
    }))
}

// ── Shared types and helpers used across sub-modules ────────────────────

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn log_api_issue(status: StatusCode, target: &'static str, message: impl AsRef<str>) {
    let message = message.as_ref();
    if status.is_server_error() {
        log::error!(target: target, "{}", message);
    } else {
        log::warn!(target: target, "{}", message);
    }
}

/// Map a StoreError to a response: the two not-found kinds become 404,
/// everything else is a server fault.
fn store_error_response(
    target: &'static str,
    context: impl Into<String>,
    error: StoreError,
) -> (StatusCode, Json<ErrorResponse>) {
    let status = if error.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    log_api_issue(status, target, format!("{}: {}", context.into(), error));
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}
