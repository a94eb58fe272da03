use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tavola_core::types::{List, ListDetails, ListPatch, ListSummary};

use super::{store_error_response, ErrorResponse};
use crate::state::AppState;

/// GET /lists -- all lists without their card data.
pub async fn get_lists(
    State(state): State<AppState>,
) -> Result<Json<Vec<ListSummary>>, (StatusCode, Json<ErrorResponse>)> {
    let lists = state
        .lists
        .get_all()
        .map_err(|e| store_error_response("tavola.api.get_lists", "Failed to read lists", e))?;
    Ok(Json(lists))
}

/// POST /lists -- create a list with no cards.
pub async fn add_list(
    State(state): State<AppState>,
    Json(details): Json<ListDetails>,
) -> Result<(StatusCode, Json<serde_json::Value>), (StatusCode, Json<ErrorResponse>)> {
    let list_id = state
        .lists
        .add(details)
        .map_err(|e| store_error_response("tavola.api.add_list", "Failed to create list", e))?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "id": list_id })),
    ))
}

/// GET /lists/{list_id} -- full list aggregate including cards.
pub async fn get_list(
    State(state): State<AppState>,
    Path(list_id): Path<u64>,
) -> Result<Json<List>, (StatusCode, Json<ErrorResponse>)> {
    let list = state.lists.get(list_id).map_err(|e| {
        store_error_response(
            "tavola.api.get_list",
            format!("Failed to read list {}", list_id),
            e,
        )
    })?;
    Ok(Json(list))
}

/// PUT /lists/{list_id} -- update list fields (not the cards).
pub async fn update_list(
    State(state): State<AppState>,
    Path(list_id): Path<u64>,
    Json(patch): Json<ListPatch>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    state.lists.update(list_id, patch).map_err(|e| {
        store_error_response(
            "tavola.api.update_list",
            format!("Failed to update list {}", list_id),
            e,
        )
    })?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// DELETE /lists/{list_id} -- delete a list and the cards it owns.
pub async fn delete_list(
    State(state): State<AppState>,
    Path(list_id): Path<u64>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    state.lists.delete(list_id).map_err(|e| {
        store_error_response(
            "tavola.api.delete_list",
            format!("Failed to delete list {}", list_id),
            e,
        )
    })?;
    Ok(Json(serde_json::json!({ "success": true })))
}
