//! Trip length and its filter buckets.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::InvalidBucket;
use super::label::{normalize, numbers_in};

/// Length of a trip in whole days.
///
/// Zero means the backend did not say; such trips sort first by duration and
/// fall into no [`DurationBucket`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripDuration(u16);

impl TripDuration {
    pub fn from_days(days: u16) -> Self {
        TripDuration(days)
    }

    pub fn days(&self) -> u16 {
        self.0
    }

    /// Parse a free-text duration label.
    ///
    /// Takes the first number in the label, so ranges resolve to their lower
    /// bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_server::domain::TripDuration;
    ///
    /// assert_eq!(TripDuration::parse_label("5-7 days").unwrap().days(), 5);
    /// assert_eq!(TripDuration::parse_label("15+ days").unwrap().days(), 15);
    /// assert!(TripDuration::parse_label("a long weekend").is_none());
    /// ```
    pub fn parse_label(label: &str) -> Option<Self> {
        let first = *numbers_in(label).first()?;
        u16::try_from(first).ok().map(TripDuration)
    }

    /// The filter bucket this duration falls into.
    pub fn bucket(&self) -> Option<DurationBucket> {
        DurationBucket::for_days(self.0)
    }
}

impl fmt::Display for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("1 day"),
            n => write!(f, "{n} days"),
        }
    }
}

/// Pre-binned duration ranges used by the duration facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DurationBucket {
    #[serde(rename = "1-4 days")]
    UpToFour,
    #[serde(rename = "5-7 days")]
    FiveToSeven,
    #[serde(rename = "8-14 days")]
    EightToFourteen,
    #[serde(rename = "15+ days")]
    FifteenPlus,
}

impl DurationBucket {
    pub const ALL: [DurationBucket; 4] = [
        DurationBucket::UpToFour,
        DurationBucket::FiveToSeven,
        DurationBucket::EightToFourteen,
        DurationBucket::FifteenPlus,
    ];

    pub fn for_days(days: u16) -> Option<Self> {
        match days {
            0 => None,
            1..=4 => Some(DurationBucket::UpToFour),
            5..=7 => Some(DurationBucket::FiveToSeven),
            8..=14 => Some(DurationBucket::EightToFourteen),
            _ => Some(DurationBucket::FifteenPlus),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBucket::UpToFour => "1-4 days",
            DurationBucket::FiveToSeven => "5-7 days",
            DurationBucket::EightToFourteen => "8-14 days",
            DurationBucket::FifteenPlus => "15+ days",
        }
    }
}

impl FromStr for DurationBucket {
    type Err = InvalidBucket;

    /// Matches the bucket labels, ignoring case, spacing and a missing
    /// "days" suffix ("5-7", "5 - 7 Days").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        let wanted = wanted.strip_suffix("days").unwrap_or(&wanted);

        DurationBucket::ALL
            .into_iter()
            .find(|b| {
                let label = normalize(b.as_str());
                label.strip_suffix("days") == Some(wanted)
            })
            .ok_or_else(|| InvalidBucket {
                kind: "duration",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
