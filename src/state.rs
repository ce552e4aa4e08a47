use std::sync::Arc;

use crate::config::Config;
use crate::store::JsonStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: JsonStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = JsonStore::new(config.data_dir.clone());
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
