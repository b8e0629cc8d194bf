use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::store::Store;

/// Shared by all workers through `web::Data`.
pub struct AppState {
    pub store: RwLock<Store>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Store, config: AppConfig) -> Self {
        AppState { store: RwLock::new(store), config }
    }
}
