//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::backend::{CommerceBackend, SimulatedBackend};
use crate::catalog::{Catalog, ListingPage, ListingQuery};
use crate::config::StorefrontConfig;
use crate::store::{ChangeBus, FileStorage, SharedStorage, StorageError};

/// Listing-cache TTL.
const LISTING_CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes

/// Listing-cache capacity.
const LISTING_CACHE_CAPACITY: u64 = 1000;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Note what this deliberately does NOT
/// hold: cart or wishlist lists. Handlers build a fresh store instance
/// per request over the shared storage, so independent surfaces only
/// converge through storage plus the change bus.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    storage: SharedStorage,
    bus: ChangeBus,
    backend: Arc<dyn CommerceBackend>,
    catalog: Catalog,
    listings: Cache<ListingQuery, ListingPage>,
}

impl AppState {
    /// Create the production state: file storage under the configured
    /// data directory and the simulated backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorageError> {
        let storage: SharedStorage = Arc::new(FileStorage::open(&config.data_dir)?);
        let backend: Arc<dyn CommerceBackend> = Arc::new(
            config
                .latency_override
                .map_or_else(SimulatedBackend::new, SimulatedBackend::with_latency),
        );
        Ok(Self::with_parts(config, storage, backend))
    }

    /// Assemble state from explicit collaborators (used by tests to
    /// inject memory storage and an instant or failing backend).
    #[must_use]
    pub fn with_parts(
        config: StorefrontConfig,
        storage: SharedStorage,
        backend: Arc<dyn CommerceBackend>,
    ) -> Self {
        let listings = Cache::builder()
            .max_capacity(LISTING_CACHE_CAPACITY)
            .time_to_live(LISTING_CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                storage,
                bus: ChangeBus::new(),
                backend,
                catalog: Catalog::demo(),
                listings,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a handle to the key-value storage.
    #[must_use]
    pub fn storage(&self) -> SharedStorage {
        Arc::clone(&self.inner.storage)
    }

    /// Get the change-notification bus.
    #[must_use]
    pub fn bus(&self) -> ChangeBus {
        self.inner.bus.clone()
    }

    /// Get a reference to the commerce backend.
    #[must_use]
    pub fn backend(&self) -> &dyn CommerceBackend {
        self.inner.backend.as_ref()
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Compute a catalog listing, memoized for five minutes per query.
    pub async fn listing(&self, query: ListingQuery) -> ListingPage {
        let catalog = self.inner.catalog.clone();
        self.inner
            .listings
            .get_with(query.clone(), async move { catalog.listing(&query) })
            .await
    }
}
