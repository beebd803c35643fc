use grind_core::config::Config;
use grind_core::roadmap::Roadmap;
use grind_core::store::ProgressStore;
use std::path::Path;
use std::sync::Arc;

/// Shared application state passed to route handlers and background loops.
///
/// Holds only the immutable catalog/config and the store handle; the store
/// itself reloads the progress file on every access, so this state never
/// caches mutable data.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub roadmap: Arc<Roadmap>,
    pub store: Arc<ProgressStore>,
}

impl AppState {
    pub fn new(root: &Path, config: Config, roadmap: Roadmap) -> Self {
        let store = ProgressStore::open(root, &config);
        Self {
            config: Arc::new(config),
            roadmap: Arc::new(roadmap),
            store: Arc::new(store),
        }
    }
}
