//! Trip catalog: fetching, normalizing and holding the backend's trips.
//!
//! The catalog is fetched once at startup from a [`CatalogSource`] (the
//! backend over HTTP, or a JSON file in development), converted into
//! domain [`Trip`](crate::domain::Trip)s, and kept in a [`CatalogStore`]
//! for the lifetime of the process.
//!
//! Key characteristics of the backend data:
//! - Durations and group sizes arrive either as numbers or as labels
//! - Ids are strings on some deployments and numbers on others
//! - Fields may be missing entirely; numbers default to zero

mod client;
mod convert;
mod error;
mod file;
mod store;
mod types;

use std::future::Future;

pub use client::{CatalogClient, CatalogConfig};
pub use convert::{ConversionError, ConvertedCatalog, convert_catalog, convert_trip};
pub use error::CatalogError;
pub use file::FileCatalog;
pub use store::{CatalogStatus, CatalogStore};
pub use types::{CatalogResponse, DurationDto, GroupSizeDto, IdDto, SeasonDto, TripDto};

/// Somewhere the full trip catalog can be fetched from.
pub trait CatalogSource {
    /// Fetch every trip record, in backend order.
    fn fetch_trips(&self) -> impl Future<Output = Result<Vec<TripDto>, CatalogError>> + Send;

    /// Human-readable origin for log messages.
    fn describe(&self) -> String;
}
