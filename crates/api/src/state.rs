use std::sync::Arc;
use std::time::Duration;

use notifier_db::models::notification::Notification;
use notifier_db::NotificationStore;

use crate::cache::{Cache, NoopCache, TtlCache};
use crate::config::ServerConfig;

/// Cache in front of the API list endpoint.
pub type ListCache = dyn Cache<Vec<Notification>>;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The only owner of notification records.
    pub store: Arc<dyn NotificationStore>,
    /// Read-through cache for `GET /api/notifications` pages.
    pub list_cache: Arc<ListCache>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state around `store`, choosing the list cache from config.
    ///
    /// A TTL of zero turns caching off.
    pub fn new(store: Arc<dyn NotificationStore>, config: ServerConfig) -> Self {
        let list_cache: Arc<ListCache> = match config.list_cache_ttl_secs {
            0 => Arc::new(NoopCache),
            secs => Arc::new(TtlCache::new(Duration::from_secs(secs))),
        };

        Self {
            store,
            list_cache,
            config: Arc::new(config),
        }
    }
}
