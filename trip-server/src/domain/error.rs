//! Domain error types.
//!
//! These errors represent validation failures when building domain values
//! from labels or raw numbers. They are distinct from fetch/IO errors.

/// Error returned when a bucket label is not one of the known buckets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} bucket: {value:?}")]
pub struct InvalidBucket {
    pub(crate) kind: &'static str,
    pub(crate) value: String,
}

/// Error returned when a rating is outside 0..=5 or not a number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid rating {0}: must be between 0 and 5")]
pub struct InvalidRating(pub f64);

/// Error returned when a price is negative or not a number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid price {0}: must be a non-negative number")]
pub struct InvalidPrice(pub f64);
