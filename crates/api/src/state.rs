use std::sync::Arc;

use giftlist_db::store::WishlistStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Storage gateway. `PgStore` in production, `MemoryStore` in tests.
    pub store: Arc<dyn WishlistStore>,
    /// Server configuration (JWT settings, share-link base URL).
    pub config: Arc<ServerConfig>,
}
