/// Shared application state passed to axum handlers.

use tavola_core::cards::CardsService;
use tavola_core::lists::ListsService;

#[derive(Clone)]
pub struct AppState {
    pub lists: ListsService,
    pub cards: CardsService,
    pub port: u16,
    pub bind_address: String,
}
