//! Trip discovery: search, facet filtering and sorting.
//!
//! Every request runs the whole chain from the full catalog:
//!
//! ```text
//! catalog -> search_filter -> facet_filter -> sort_trips -> results
//! ```
//!
//! Each stage is a pure function from a slice of trips to a new vector;
//! nothing is cached between requests.

mod facet;
mod options;
mod search;
mod sort;

#[cfg(test)]
mod properties;

use tracing::debug;

use crate::domain::Trip;

pub use facet::{FilterState, PriceRange, facet_filter};
pub use options::FacetOptions;
pub use search::search_filter;
pub use sort::{SortKey, UnknownSortKey, sort_trips};

/// Everything the user has chosen: search text, filters and ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryQuery {
    pub search: String,
    pub filters: FilterState,
    pub sort: SortKey,
}

impl DiscoveryQuery {
    /// A query that only searches.
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Self::default()
        }
    }

    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Run search, facets and sort over `trips`.
pub fn discover(trips: &[Trip], query: &DiscoveryQuery) -> Vec<Trip> {
    let searched = search_filter(trips, &query.search);
    let filtered = facet_filter(&searched, &query.filters);
    let sorted = sort_trips(&filtered, query.sort);

    debug!(
        catalog = trips.len(),
        searched = searched.len(),
        filtered = sorted.len(),
        sort = %query.sort,
        "discovery pipeline"
    );

    sorted
}
