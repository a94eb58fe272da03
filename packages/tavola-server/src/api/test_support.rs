use std::sync::Arc;

use tavola_core::cards::CardsService;
use tavola_core::lists::ListsService;
use tavola_core::storage::local::LocalStorage;
use tavola_core::storage::ListStorage;
use tempfile::TempDir;

use crate::state::AppState;

/// App state over a file-backed storage in a temp directory.
pub fn test_state(dir: &TempDir) -> AppState {
    let storage: Arc<dyn ListStorage> =
        Arc::new(LocalStorage::open(&dir.path().join("lists.json")).unwrap());
    AppState {
        lists: ListsService::new(Arc::clone(&storage)),
        cards: CardsService::new(storage),
        port: 0,
        bind_address: "127.0.0.1".to_string(),
    }
}
