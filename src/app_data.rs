use std::sync::Arc;
use crate::config::ServerSettings;
use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// Created once in main.rs and shared with the API layer. The item table
/// lives here rather than in a global, so every request reaches the same
/// store through an explicit handle.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(settings)
///   ↓ creates once
///   ├─ settings (ServerSettings)
///   └─ item_store (Arc<ItemStore>)
///   ↓ wrapped in Arc<AppData>
///   ↓ passed to api::build_app
///   └─ ItemsApi::new(item_store)
/// ```
pub struct AppData {
    pub settings: ServerSettings,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Initialize all application data with an empty item table
    pub fn init(settings: ServerSettings) -> Self {
        tracing::info!("Initializing AppData...");

        let item_store = Arc::new(ItemStore::new());

        tracing::info!("AppData initialization complete");

        Self {
            settings,
            item_store,
        }
    }
}
