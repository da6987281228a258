//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::lookup::{LookupError, VolumesClient};
use crate::services::DelayedRetrieval;
use crate::store::{CatalogStore, SharedCatalog};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; every clone sees the same catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    catalog: SharedCatalog,
    volumes: VolumesClient,
    retrieval: DelayedRetrieval,
}

impl AppState {
    /// Create application state around a freshly seeded catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the volumes HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, LookupError> {
        Self::with_catalog(config, CatalogStore::seeded())
    }

    /// Create application state around the given catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the volumes HTTP client cannot be built.
    pub fn with_catalog(config: ApiConfig, catalog: CatalogStore) -> Result<Self, LookupError> {
        let volumes = VolumesClient::new(&config.lookup)?;
        let retrieval = DelayedRetrieval::new(config.retrieval_delay);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: catalog.into_shared(),
                volumes,
                retrieval,
            }),
        })
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &SharedCatalog {
        &self.inner.catalog
    }

    /// Get a reference to the external volumes client.
    #[must_use]
    pub fn volumes(&self) -> &VolumesClient {
        &self.inner.volumes
    }

    /// Get the deferred retrieval helper.
    #[must_use]
    pub fn retrieval(&self) -> DelayedRetrieval {
        self.inner.retrieval
    }
}
