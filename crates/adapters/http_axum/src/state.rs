//! Shared application state for axum handlers.

use std::sync::Arc;

use hbnb_app::ports::Storage;
use hbnb_app::services::resource_service::ResourceService;
use hbnb_app::services::stats_service::StatsService;

/// Application state shared across all axum handlers.
///
/// Generic over the storage type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the storage itself does not need to
/// be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Generic record CRUD service.
    pub resources: Arc<ResourceService<S>>,
    /// Record counts.
    pub stats: Arc<StatsService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            resources: Arc::clone(&self.resources),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<S> AppState<S>
where
    S: Storage + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(resources: ResourceService<S>, stats: StatsService<S>) -> Self {
        Self {
            resources: Arc::new(resources),
            stats: Arc::new(stats),
        }
    }
}

impl<S> AppState<S>
where
    S: Storage + Clone + Send + Sync + 'static,
{
    /// Build both services over clones of one storage handle.
    pub fn from_storage(storage: S) -> Self {
        Self::new(
            ResourceService::new(storage.clone()),
            StatsService::new(storage),
        )
    }
}
