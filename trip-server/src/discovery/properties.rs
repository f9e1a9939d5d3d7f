//! Property tests for the discovery pipeline.

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::*;
use crate::domain::{Difficulty, GroupSize, Price, Rating, Season, TripDuration};

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

fn season_strategy() -> impl Strategy<Value = Season> {
    prop::sample::select(Season::ALL.to_vec())
}

/// A trip with fields drawn from small pools so that ties and facet hits
/// actually happen.
fn trip_strategy() -> impl Strategy<Value = Trip> {
    (
        0u32..10_000,
        prop::sample::select(vec!["Spiti", "Goa", "Kerala Backwaters", "Ladakh Ride", "Coorg"]),
        prop::sample::select(vec!["Himalayas", "Goa", "Kerala", "Karnataka"]),
        0u32..50_000,
        0u16..=20,
        difficulty_strategy(),
        0u8..=50,
        prop::option::of(1u16..30),
        prop::collection::vec(season_strategy(), 0..3),
    )
        .prop_map(
            |(id, name, destination, price, days, difficulty, rating_tenths, group, seasons)| {
                let mut trip =
                    Trip::new(id.to_string(), name, destination, Price::new(price), difficulty);
                trip.duration = TripDuration::from_days(days);
                trip.rating = Rating::new(f64::from(rating_tenths) / 10.0).unwrap();
                trip.group_size = group.and_then(GroupSize::new);
                trip.seasons = seasons;
                trip
            },
        )
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Trip>> {
    prop::collection::vec(trip_strategy(), 0..25)
}

fn sort_key_strategy() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn filter_strategy() -> impl Strategy<Value = FilterState> {
    (
        prop::collection::btree_set(
            prop::sample::select(vec!["Himalayas".to_string(), "Goa".to_string(), "Ker".to_string()]),
            0..2,
        ),
        prop::collection::btree_set(difficulty_strategy(), 0..3),
        prop::collection::btree_set(season_strategy(), 0..3),
        0u32..50_000,
        0u32..50_000,
        0u8..=50,
    )
        .prop_map(|(destinations, difficulties, seasons, lo, hi, floor)| FilterState {
            destinations,
            difficulties,
            seasons,
            price_range: PriceRange::new(Price::new(lo), Price::new(hi)),
            min_rating: f32::from(floor) / 10.0,
            ..FilterState::default()
        })
}

/// Whether `sub` is an order-preserving subsequence of `all`.
fn is_subsequence(sub: &[Trip], all: &[Trip]) -> bool {
    let mut rest = all.iter();
    sub.iter().all(|wanted| rest.any(|t| t == wanted))
}

proptest! {
    #[test]
    fn default_filters_are_identity(catalog in catalog_strategy()) {
        prop_assert_eq!(facet_filter(&catalog, &FilterState::default()), catalog);
    }

    #[test]
    fn sort_is_idempotent(catalog in catalog_strategy(), key in sort_key_strategy()) {
        let once = sort_trips(&catalog, key);
        let twice = sort_trips(&once, key);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_is_a_permutation(catalog in catalog_strategy(), key in sort_key_strategy()) {
        let sorted = sort_trips(&catalog, key);
        prop_assert_eq!(sorted.len(), catalog.len());
        for trip in &catalog {
            prop_assert!(sorted.contains(trip));
        }
    }

    #[test]
    fn price_orders_mirror_without_ties(
        prices in prop::collection::btree_set(0u32..100_000, 0..20)
    ) {
        // Distinct prices, shuffled into a non-sorted order by alternating ends
        let mut prices: Vec<u32> = prices.into_iter().collect();
        let mut order = Vec::with_capacity(prices.len());
        while !prices.is_empty() {
            order.push(prices.remove(0));
            if let Some(last) = prices.pop() {
                order.push(last);
            }
        }
        let catalog: Vec<Trip> = order
            .iter()
            .map(|p| Trip::new(p.to_string(), "Trip", "Goa", Price::new(*p), Difficulty::Easy))
            .collect();

        let mut ascending = sort_trips(&catalog, SortKey::PriceLowToHigh);
        ascending.reverse();
        prop_assert_eq!(ascending, sort_trips(&catalog, SortKey::PriceHighToLow));
    }

    #[test]
    fn empty_search_is_identity(catalog in catalog_strategy(), blank in "[ \t]{0,3}") {
        prop_assert_eq!(search_filter(&catalog, &blank), catalog);
    }

    #[test]
    fn search_returns_subsequence(catalog in catalog_strategy(), query in "[a-zA-Z ]{0,6}") {
        let found = search_filter(&catalog, &query);
        prop_assert!(is_subsequence(&found, &catalog));
    }

    #[test]
    fn facet_filter_returns_matching_subsequence(
        catalog in catalog_strategy(),
        filters in filter_strategy()
    ) {
        let found = facet_filter(&catalog, &filters);
        prop_assert!(is_subsequence(&found, &catalog));
        for trip in &found {
            prop_assert!(filters.matches(trip));
        }
        let rejected = catalog.iter().filter(|t| !filters.matches(t)).count();
        prop_assert_eq!(found.len() + rejected, catalog.len());
    }

    #[test]
    fn discover_matches_manual_chain(
        catalog in catalog_strategy(),
        filters in filter_strategy(),
        key in sort_key_strategy(),
        query in "[a-z]{0,3}"
    ) {
        let manual = sort_trips(
            &facet_filter(&search_filter(&catalog, &query), &filters),
            key,
        );
        let discovery = DiscoveryQuery::search(query).with_filters(filters).with_sort(key);
        prop_assert_eq!(discover(&catalog, &discovery), manual);
    }

    #[test]
    fn single_destination_facet_is_substring(catalog in catalog_strategy()) {
        let filters = FilterState {
            destinations: BTreeSet::from(["Ker".to_string()]),
            ..FilterState::default()
        };
        for trip in facet_filter(&catalog, &filters) {
            prop_assert!(trip.destination.contains("Ker"));
        }
    }
}
