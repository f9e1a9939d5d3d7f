//! Application state for the web layer.

use std::sync::Arc;

use crate::auth::IdentityClient;
use crate::catalog::CatalogStore;

/// Shared application state.
///
/// The catalog is loaded before the router is built and never changes, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Trip catalog, fetched once at startup
    pub catalog: Arc<CatalogStore>,

    /// Identity service for admin routes; `None` disables them
    pub identity: Option<Arc<IdentityClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: CatalogStore, identity: Option<IdentityClient>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            identity: identity.map(Arc::new),
        }
    }
}
