//! Application context - dependency injection container

use std::sync::Arc;

use hourglass_core::{DocumentStore, TrackerService};
use hourglass_domain::{Result, TrackerConfig};
use hourglass_infra::JsonFileStore;

/// Application context - holds all services and dependencies
///
/// Built once at startup and shared across handlers via `State`.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<TrackerConfig>,
    pub store: Arc<dyn DocumentStore>,
    pub tracker: Arc<TrackerService>,
}

impl AppContext {
    /// Build the context from configuration: open the document store and
    /// load the tracker service from it.
    ///
    /// # Errors
    /// Returns [`hourglass_domain::HourglassError::StoreUnavailable`] when
    /// the persisted document cannot be read.
    pub async fn new(config: TrackerConfig) -> Result<Self> {
        let store: Arc<dyn DocumentStore> =
            Arc::new(JsonFileStore::new(config.store.path.clone()));
        let tracker =
            Arc::new(TrackerService::load(Arc::clone(&store), config.engine.clone()).await?);

        Ok(Self { config: Arc::new(config), store, tracker })
    }

    /// Build the context on top of an existing store implementation.
    ///
    /// Tests use this to swap in stores backed by temp files or memory.
    ///
    /// # Errors
    /// Returns [`hourglass_domain::HourglassError::StoreUnavailable`] when
    /// the store's document cannot be read.
    pub async fn with_store(config: TrackerConfig, store: Arc<dyn DocumentStore>) -> Result<Self> {
        let tracker =
            Arc::new(TrackerService::load(Arc::clone(&store), config.engine.clone()).await?);

        Ok(Self { config: Arc::new(config), store, tracker })
    }

    /// Probe the backing store.
    ///
    /// # Errors
    /// Returns the store's error when the document cannot be read.
    pub async fn health_check(&self) -> Result<()> {
        self.store.load().await.map(|_| ())
    }
}
