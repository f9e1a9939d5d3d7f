//! Catalog summary for populating the filter panel.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{Difficulty, DurationBucket, GroupSizeBucket, Season, Trip};

/// The values actually present in a catalog, per facet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FacetOptions {
    /// Distinct destinations, sorted.
    pub destinations: Vec<String>,
    pub durations: Vec<DurationBucket>,
    pub difficulties: Vec<Difficulty>,
    pub seasons: Vec<Season>,
    pub group_sizes: Vec<GroupSizeBucket>,
    /// Cheapest trip, if any.
    pub min_price: Option<u32>,
    /// Most expensive trip, if any.
    pub max_price: Option<u32>,
}

impl FacetOptions {
    pub fn from_trips(trips: &[Trip]) -> Self {
        let mut destinations = BTreeSet::new();
        let mut durations = BTreeSet::new();
        let mut difficulties = BTreeSet::new();
        let mut seasons = BTreeSet::new();
        let mut group_sizes = BTreeSet::new();

        for trip in trips {
            destinations.insert(trip.destination.clone());
            durations.extend(trip.duration_bucket());
            difficulties.insert(trip.difficulty);
            seasons.extend(trip.seasons.iter().copied());
            group_sizes.extend(trip.group_size_bucket());
        }

        Self {
            destinations: destinations.into_iter().collect(),
            durations: durations.into_iter().collect(),
            difficulties: difficulties.into_iter().collect(),
            seasons: seasons.into_iter().collect(),
            group_sizes: group_sizes.into_iter().collect(),
            min_price: trips.iter().map(|t| t.price.amount()).min(),
            max_price: trips.iter().map(|t| t.price.amount()).max(),
        }
    }
}
