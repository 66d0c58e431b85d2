/// Shared application state
use mixtape_catalog::CatalogClient;
use mixtape_storage::PlaylistStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PlaylistStore>,
    pub catalog: Arc<CatalogClient>,
}

impl AppState {
    pub fn new(store: Arc<PlaylistStore>, catalog: Arc<CatalogClient>) -> Self {
        Self { store, catalog }
    }
}
