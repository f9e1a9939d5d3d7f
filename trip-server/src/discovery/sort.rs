//! Result ordering.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::Trip;

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0:?}")]
pub struct UnknownSortKey(String);

/// How to order discovery results.
///
/// The wire names (`priceLowToHigh`, `nameAZ`, ...) are what the web client
/// sends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Backend order, untouched.
    #[default]
    Recommended,
    PriceLowToHigh,
    PriceHighToLow,
    RatingHighToLow,
    RatingLowToHigh,
    DurationShortToLong,
    DurationLongToShort,
    #[serde(rename = "nameAZ")]
    NameAZ,
    #[serde(rename = "nameZA")]
    NameZA,
}

impl SortKey {
    pub const ALL: [SortKey; 9] = [
        SortKey::Recommended,
        SortKey::PriceLowToHigh,
        SortKey::PriceHighToLow,
        SortKey::RatingHighToLow,
        SortKey::RatingLowToHigh,
        SortKey::DurationShortToLong,
        SortKey::DurationLongToShort,
        SortKey::NameAZ,
        SortKey::NameZA,
    ];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::PriceLowToHigh => "priceLowToHigh",
            SortKey::PriceHighToLow => "priceHighToLow",
            SortKey::RatingHighToLow => "ratingHighToLow",
            SortKey::RatingLowToHigh => "ratingLowToHigh",
            SortKey::DurationShortToLong => "durationShortToLong",
            SortKey::DurationLongToShort => "durationLongToShort",
            SortKey::NameAZ => "nameAZ",
            SortKey::NameZA => "nameZA",
        }
    }

    /// Label for the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Recommended => "Recommended",
            SortKey::PriceLowToHigh => "Price: Low to High",
            SortKey::PriceHighToLow => "Price: High to Low",
            SortKey::RatingHighToLow => "Rating: High to Low",
            SortKey::RatingLowToHigh => "Rating: Low to High",
            SortKey::DurationShortToLong => "Duration: Short to Long",
            SortKey::DurationLongToShort => "Duration: Long to Short",
            SortKey::NameAZ => "Name: A to Z",
            SortKey::NameZA => "Name: Z to A",
        }
    }

    /// Parse a wire name, falling back to [`SortKey::Recommended`] for
    /// anything unrecognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_server::discovery::SortKey;
    ///
    /// assert_eq!(SortKey::parse_or_default("nameZA"), SortKey::NameZA);
    /// assert_eq!(SortKey::parse_or_default("popularity"), SortKey::Recommended);
    /// ```
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == trimmed)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return the trips ordered by `key`, leaving the input untouched.
///
/// The sort is stable, so ties keep their input order and sorting an
/// already-sorted sequence changes nothing.
pub fn sort_trips(trips: &[Trip], key: SortKey) -> Vec<Trip> {
    let mut sorted = trips.to_vec();

    match key {
        SortKey::Recommended => {}
        SortKey::PriceLowToHigh => sorted.sort_by_key(|t| t.price),
        SortKey::PriceHighToLow => sorted.sort_by_key(|t| Reverse(t.price)),
        SortKey::RatingHighToLow => sorted.sort_by_key(|t| Reverse(t.rating)),
        SortKey::RatingLowToHigh => sorted.sort_by_key(|t| t.rating),
        SortKey::DurationShortToLong => sorted.sort_by_key(|t| t.duration),
        SortKey::DurationLongToShort => sorted.sort_by_key(|t| Reverse(t.duration)),
        SortKey::NameAZ => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::NameZA => sorted.sort_by(|a, b| b.name.cmp(&a.name)),
    }

    sorted
}
