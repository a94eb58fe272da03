mod api;
mod config;
mod server;
mod state;

use std::sync::Arc;

use tavola_core::cards::CardsService;
use tavola_core::lists::ListsService;
use tavola_core::storage::local::LocalStorage;
use tavola_core::storage::ListStorage;

use crate::state::AppState;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = config::default_config_path();
    let cfg = config::load_config(&config_path);

    let storage = match LocalStorage::open(&cfg.data_file) {
        Ok(storage) => storage,
        Err(e) => {
            log::error!(
                "Failed to open data file {}: {}",
                cfg.data_file.display(),
                e
            );
            std::process::exit(1);
        }
    };
    let storage: Arc<dyn ListStorage> = Arc::new(storage);

    let state = AppState {
        lists: ListsService::new(Arc::clone(&storage)),
        cards: CardsService::new(storage),
        port: cfg.port,
        bind_address: cfg.bind_address.clone(),
    };

    if let Err(e) = server::run(state).await {
        log::error!("HTTP server exited with error: {}", e);
        std::process::exit(1);
    }
}
