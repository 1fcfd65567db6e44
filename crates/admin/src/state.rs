//! Application state shared across handlers.

use std::sync::Arc;

use crate::backend::{AdminBackend, SimulatedAdminBackend};
use crate::config::AdminConfig;
use crate::repo::AdminRepo;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    repo: AdminRepo,
    backend: Arc<dyn AdminBackend>,
}

impl AppState {
    /// Create the production state: seeded tables and the simulated
    /// backend.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let backend: Arc<dyn AdminBackend> = Arc::new(
            config
                .latency_override
                .map_or_else(SimulatedAdminBackend::new, SimulatedAdminBackend::with_latency),
        );
        Self::with_backend(config, backend)
    }

    /// Assemble state with an explicit backend (tests inject an instant
    /// or failing one).
    #[must_use]
    pub fn with_backend(config: AdminConfig, backend: Arc<dyn AdminBackend>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                repo: AdminRepo::seeded(),
                backend,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the in-memory tables.
    #[must_use]
    pub fn repo(&self) -> &AdminRepo {
        &self.inner.repo
    }

    /// Get a reference to the admin backend.
    #[must_use]
    pub fn backend(&self) -> &dyn AdminBackend {
        self.inner.backend.as_ref()
    }
}
