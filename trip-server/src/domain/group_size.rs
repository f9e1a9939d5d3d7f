//! Group size and its filter buckets.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::InvalidBucket;
use super::label::numbers_in;

/// Maximum number of travellers a trip takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupSize(u16);

impl GroupSize {
    /// Returns `None` for an empty group.
    pub fn new(max: u16) -> Option<Self> {
        (max > 0).then_some(GroupSize(max))
    }

    pub fn max_size(&self) -> u16 {
        self.0
    }

    /// Parse a free-text group size label.
    ///
    /// Ranges resolve to their upper bound ("8-12 people" takes up to 12).
    /// Bare bucket names resolve to the largest size in that bucket, with
    /// "Large" taken as its lower bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_server::domain::GroupSize;
    ///
    /// assert_eq!(GroupSize::parse_label("8-12 people").unwrap().max_size(), 12);
    /// assert_eq!(GroupSize::parse_label("Small").unwrap().max_size(), 6);
    /// assert!(GroupSize::parse_label("flexible").is_none());
    /// ```
    pub fn parse_label(label: &str) -> Option<Self> {
        if let Some(last) = numbers_in(label).last() {
            return u16::try_from(*last).ok().and_then(GroupSize::new);
        }

        let bucket: GroupSizeBucket = label.parse().ok()?;
        GroupSize::new(bucket.representative_size())
    }

    pub fn bucket(&self) -> GroupSizeBucket {
        GroupSizeBucket::for_size(self.0)
    }
}

impl fmt::Display for GroupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "up to {}", self.0)
    }
}

/// Pre-binned group size ranges used by the group-size facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GroupSizeBucket {
    /// Up to 6 travellers.
    Small,
    /// 7 to 12 travellers.
    Medium,
    /// 13 or more.
    Large,
}

impl GroupSizeBucket {
    pub const ALL: [GroupSizeBucket; 3] = [
        GroupSizeBucket::Small,
        GroupSizeBucket::Medium,
        GroupSizeBucket::Large,
    ];

    pub fn for_size(max: u16) -> Self {
        match max {
            0..=6 => GroupSizeBucket::Small,
            7..=12 => GroupSizeBucket::Medium,
            _ => GroupSizeBucket::Large,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupSizeBucket::Small => "Small",
            GroupSizeBucket::Medium => "Medium",
            GroupSizeBucket::Large => "Large",
        }
    }

    fn representative_size(&self) -> u16 {
        match self {
            GroupSizeBucket::Small => 6,
            GroupSizeBucket::Medium => 12,
            GroupSizeBucket::Large => 13,
        }
    }
}

impl FromStr for GroupSizeBucket {
    type Err = InvalidBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        GroupSizeBucket::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidBucket {
                kind: "group size",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for GroupSizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
