//! The normalized trip record.

use std::cmp::Ordering;
use std::fmt;

use super::error::{InvalidPrice, InvalidRating};
use super::{Difficulty, DurationBucket, GroupSize, GroupSizeBucket, Season, TripDuration};

/// Backend identifier of a trip.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripId(String);

impl TripId {
    pub fn new(id: impl Into<String>) -> Self {
        TripId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Currency-less whole price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u32);

impl Price {
    pub const fn new(amount: u32) -> Self {
        Price(amount)
    }

    /// Build a price from a JSON number, rounding to the nearest whole unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_server::domain::Price;
    ///
    /// assert_eq!(Price::from_f64(21150.4).unwrap().amount(), 21150);
    /// assert!(Price::from_f64(-5.0).is_err());
    /// assert!(Price::from_f64(f64::NAN).is_err());
    /// ```
    pub fn from_f64(amount: f64) -> Result<Self, InvalidPrice> {
        if !amount.is_finite() || amount < 0.0 || amount.round() > u32::MAX as f64 {
            return Err(InvalidPrice(amount));
        }
        Ok(Price(amount.round() as u32))
    }

    pub fn amount(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Average review score, always finite and within 0..=5.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rating(f32);

impl Rating {
    pub const MAX: f32 = 5.0;

    pub fn new(score: f64) -> Result<Self, InvalidRating> {
        if !score.is_finite() || !(0.0..=Self::MAX as f64).contains(&score) {
            return Err(InvalidRating(score));
        }
        // abs() folds -0.0 into 0.0 so Eq and Ord agree
        Ok(Rating((score as f32).abs()))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

// Construction rejects NaN, so the partial order is total.
impl Eq for Rating {}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// A trip in the catalog.
///
/// Built once at the catalog boundary from the backend's loosely-typed
/// record; everything downstream relies on these field types.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub destination: String,
    pub price: Price,
    pub duration: TripDuration,
    pub difficulty: Difficulty,
    pub rating: Rating,
    pub group_size: Option<GroupSize>,
    pub seasons: Vec<Season>,
    pub image_url: Option<String>,
    pub description: String,
}

impl Trip {
    /// Create a trip with the required fields; the rest start empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        destination: impl Into<String>,
        price: Price,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: TripId::new(id),
            name: name.into(),
            destination: destination.into(),
            price,
            duration: TripDuration::default(),
            difficulty,
            rating: Rating::default(),
            group_size: None,
            seasons: Vec::new(),
            image_url: None,
            description: String::new(),
        }
    }

    pub fn duration_bucket(&self) -> Option<DurationBucket> {
        self.duration.bucket()
    }

    pub fn group_size_bucket(&self) -> Option<GroupSizeBucket> {
        self.group_size.map(|g| g.bucket())
    }
}
