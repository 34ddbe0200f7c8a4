use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chantier_core::ProjectStore;

/// Shared application state.
///
/// The lock is the single-writer boundary the core contract assumes; it is
/// never held across an await point.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<ProjectStore>>,
}

impl AppState {
    pub fn new(sample_data: bool) -> Self {
        let store = if sample_data {
            ProjectStore::with_sample_data()
        } else {
            ProjectStore::new()
        };

        AppState {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn store(&self) -> RwLockReadGuard<'_, ProjectStore> {
        self.store.read().expect("store lock poisoned")
    }

    pub fn store_mut(&self) -> RwLockWriteGuard<'_, ProjectStore> {
        self.store.write().expect("store lock poisoned")
    }
}
