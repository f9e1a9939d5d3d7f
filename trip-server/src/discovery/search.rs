//! Free-text search over trip names and destinations.

use crate::domain::Trip;

/// Keep the trips whose name or destination contains `query`.
///
/// Matching is a case-insensitive substring test; there is no tokenizing or
/// ranking. Surrounding whitespace in the query is ignored, and a blank
/// query keeps every trip. Input order is preserved.
pub fn search_filter(trips: &[Trip], query: &str) -> Vec<Trip> {
    let needle = query.trim();
    if needle.is_empty() {
        return trips.to_vec();
    }

    let needle = needle.to_lowercase();
    trips
        .iter()
        .filter(|trip| matches_query(trip, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercase.
fn matches_query(trip: &Trip, needle: &str) -> bool {
    trip.name.to_lowercase().contains(needle) || trip.destination.to_lowercase().contains(needle)
}
