use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tavola_core::types::{Card, CardDetails, CardPatch};

use super::{store_error_response, ErrorResponse};
use crate::state::AppState;

/// GET /lists/{list_id}/cards -- all cards of a list, in sequence order.
pub async fn get_cards(
    State(state): State<AppState>,
    Path(list_id): Path<u64>,
) -> Result<Json<Vec<Card>>, (StatusCode, Json<ErrorResponse>)> {
    let cards = state.cards.get_all(list_id).map_err(|e| {
        store_error_response(
            "tavola.api.get_cards",
            format!("Failed to read cards of list {}", list_id),
            e,
        )
    })?;
    Ok(Json(cards))
}

/// POST /lists/{list_id}/cards -- create a card in a list.
pub async fn add_card(
    State(state): State<AppState>,
    Path(list_id): Path<u64>,
    Json(details): Json<CardDetails>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, Json<ErrorResponse>)> {
    let card_id = state.cards.add(list_id, details).map_err(|e| {
        store_error_response(
            "tavola.api.add_card",
            format!("Failed to add card to list {}", list_id),
            e,
        )
    })?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": card_id })),
    ))
}

/// PUT /lists/{list_id}/cards/{card_id} -- update card fields.
pub async fn update_card(
    State(state): State<AppState>,
    Path((list_id, card_id)): Path<(u64, u64)>,
    Json(patch): Json<CardPatch>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    state.cards.update(list_id, card_id, patch).map_err(|e| {
        store_error_response(
            "tavola.api.update_card",
            format!("Failed to update card {} of list {}", card_id, list_id),
            e,
        )
    })?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// DELETE /lists/{list_id}/cards/{card_id} -- delete a card from a list.
pub async fn delete_card(
    State(state): State<AppState>,
    Path((list_id, card_id)): Path<(u64, u64)>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    state.cards.delete(list_id, card_id).map_err(|e| {
        store_error_response(
            "tavola.api.delete_card",
            format!("Failed to delete card {} of list {}", card_id, list_id),
            e,
        )
    })?;
    Ok(Json(serde_json::json!({ "success": true })))
}
