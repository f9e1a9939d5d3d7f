//! Domain types for trip discovery.
//!
//! This module contains the normalized trip model. All types enforce their
//! invariants at construction time, so the discovery pipeline can compare
//! prices, ratings and buckets without re-checking the backend's data.

mod difficulty;
mod duration;
mod error;
mod group_size;
mod label;
mod season;
mod trip;

pub use difficulty::{Difficulty, InvalidDifficulty};
pub use duration::{DurationBucket, TripDuration};
pub use error::{InvalidBucket, InvalidPrice, InvalidRating};
pub use group_size::{GroupSize, GroupSizeBucket};
pub use season::{InvalidSeason, Season};
pub use trip::{Price, Rating, Trip, TripId};
