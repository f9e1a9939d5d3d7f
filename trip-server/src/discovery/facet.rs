//! Multi-facet trip filtering.
//!
//! Facets combine with AND; the values selected within one facet combine
//! with OR. A facet with nothing selected does not filter at all.

use std::collections::BTreeSet;

use crate::domain::{Difficulty, DurationBucket, GroupSizeBucket, Price, Season, Trip};

/// Inclusive price bounds.
///
/// Bounds are kept exactly as given. A range whose `min` exceeds its `max`
/// is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Price,
    pub max: Price,
}

impl PriceRange {
    /// A range every price falls into.
    pub const UNBOUNDED: PriceRange = PriceRange {
        min: Price::new(0),
        max: Price::new(u32::MAX),
    };

    pub fn new(min: Price, max: Price) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }

    /// Whether `min` has been moved above `max`.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// The filter panel's selections.
///
/// `FilterState::default()` filters nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Matched as substrings of the trip's destination.
    pub destinations: BTreeSet<String>,
    pub durations: BTreeSet<DurationBucket>,
    pub difficulties: BTreeSet<Difficulty>,
    /// A trip matches if any of its season tags is selected.
    pub seasons: BTreeSet<Season>,
    pub group_sizes: BTreeSet<GroupSizeBucket>,
    pub price_range: PriceRange,
    /// Minimum rating; 0 disables the check.
    pub min_rating: f32,
}

impl FilterState {
    /// Defaults for a freshly opened filter panel: nothing selected and the
    /// price range spanning the catalog's cheapest to dearest trip.
    pub fn for_catalog(trips: &[Trip]) -> Self {
        let price_range = match (
            trips.iter().map(|t| t.price).min(),
            trips.iter().map(|t| t.price).max(),
        ) {
            (Some(min), Some(max)) => PriceRange::new(min, max),
            _ => PriceRange::UNBOUNDED,
        };

        Self {
            price_range,
            ..Self::default()
        }
    }

    /// Number of facets currently narrowing the results, counting a price
    /// range as active only when it differs from `baseline`.
    pub fn active_count(&self, baseline: PriceRange) -> usize {
        [
            !self.destinations.is_empty(),
            !self.durations.is_empty(),
            !self.difficulties.is_empty(),
            !self.seasons.is_empty(),
            !self.group_sizes.is_empty(),
            self.price_range != baseline,
            self.min_rating > 0.0,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Whether `trip` passes every active facet.
    pub fn matches(&self, trip: &Trip) -> bool {
        self.matches_destination(trip)
            && matches_bucket(&self.durations, trip.duration_bucket())
            && (self.difficulties.is_empty() || self.difficulties.contains(&trip.difficulty))
            && self.matches_season(trip)
            && matches_bucket(&self.group_sizes, trip.group_size_bucket())
            && self.price_range.contains(trip.price)
            && (self.min_rating <= 0.0 || trip.rating.value() >= self.min_rating)
    }

    fn matches_destination(&self, trip: &Trip) -> bool {
        self.destinations.is_empty()
            || self
                .destinations
                .iter()
                .any(|d| trip.destination.contains(d.as_str()))
    }

    fn matches_season(&self, trip: &Trip) -> bool {
        self.seasons.is_empty() || trip.seasons.iter().any(|s| self.seasons.contains(s))
    }
}

/// An empty selection matches everything; otherwise the trip needs a bucket
/// and it must be selected.
fn matches_bucket<T: Ord>(selected: &BTreeSet<T>, bucket: Option<T>) -> bool {
    selected.is_empty() || bucket.is_some_and(|b| selected.contains(&b))
}

/// Keep the trips that pass every active facet, in input order.
pub fn facet_filter(trips: &[Trip], filters: &FilterState) -> Vec<Trip> {
    trips
        .iter()
        .filter(|trip| filters.matches(trip))
        .cloned()
        .collect()
}
