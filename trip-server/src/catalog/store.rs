//! The in-memory trip catalog.
//!
//! Fetched once at startup and immutable afterwards. A failed fetch is not
//! an error for callers: the store is simply empty and says why.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::discovery::{DiscoveryQuery, FacetOptions, FilterState, discover};
use crate::domain::Trip;

use super::CatalogSource;
use super::convert::convert_catalog;

/// Outcome of the catalog fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    /// Fetch succeeded.
    Loaded {
        fetched_at: DateTime<Utc>,
        /// Records skipped as malformed.
        rejected: usize,
    },
    /// Fetch failed; the catalog is empty.
    Unavailable {
        failed_at: DateTime<Utc>,
        message: String,
    },
}

/// Immutable catalog shared by all requests.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    trips: Arc<[Trip]>,
    status: CatalogStatus,
}

impl CatalogStore {
    /// Fetch and convert the catalog from `source`.
    ///
    /// Never fails: fetch errors are logged and produce an empty store.
    pub async fn load<S: CatalogSource>(source: &S) -> Self {
        let origin = source.describe();

        match source.fetch_trips().await {
            Ok(dtos) => {
                let converted = convert_catalog(&dtos);
                if converted.rejected > 0 {
                    warn!(
                        %origin,
                        rejected = converted.rejected,
                        "some catalog records were malformed"
                    );
                }
                info!(%origin, trips = converted.trips.len(), "loaded trip catalog");

                Self {
                    trips: converted.trips.into(),
                    status: CatalogStatus::Loaded {
                        fetched_at: Utc::now(),
                        rejected: converted.rejected,
                    },
                }
            }
            Err(e) => {
                error!(%origin, error = %e, "failed to fetch trip catalog");
                Self::unavailable(e.to_string())
            }
        }
    }

    /// A loaded store holding exactly `trips`.
    pub fn from_trips(trips: Vec<Trip>) -> Self {
        Self {
            trips: trips.into(),
            status: CatalogStatus::Loaded {
                fetched_at: Utc::now(),
                rejected: 0,
            },
        }
    }

    /// An empty store recording a failed fetch.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            trips: Arc::from(Vec::new()),
            status: CatalogStatus::Unavailable {
                failed_at: Utc::now(),
                message: message.into(),
            },
        }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    /// Whether the fetch succeeded (the catalog may still be empty).
    pub fn is_available(&self) -> bool {
        matches!(self.status, CatalogStatus::Loaded { .. })
    }

    /// Look up a trip by id.
    pub fn get(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id.as_str() == id)
    }

    /// Run the discovery pipeline over the whole catalog.
    pub fn discover(&self, query: &DiscoveryQuery) -> Vec<Trip> {
        discover(&self.trips, query)
    }

    /// Options for the filter panel.
    pub fn facet_options(&self) -> FacetOptions {
        FacetOptions::from_trips(&self.trips)
    }

    /// Filter-panel defaults: everything selected, price spanning the catalog.
    pub fn default_filters(&self) -> FilterState {
        FilterState::for_catalog(&self.trips)
    }
}
