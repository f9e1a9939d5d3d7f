//! Data transfer objects for web requests and responses.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{CatalogStatus, CatalogStore};
use crate::discovery::{DiscoveryQuery, FilterState, PriceRange, SortKey};
use crate::domain::{
    Difficulty, DurationBucket, GroupSizeBucket, InvalidBucket, InvalidDifficulty, InvalidSeason,
    Price, Season, Trip,
};

/// Query string accepted by the trip listing endpoints.
///
/// Label facets are comma separated (`difficulty=Easy,Hard`) or repeated
/// (`difficulty=Easy&difficulty=Hard`, as checkboxes submit them).
/// Destinations are free text and may contain commas, so each `destination`
/// value is taken whole and several are given by repeating the key. Blank
/// values count as absent, so an HTML form can submit every field.
#[derive(Debug, Clone, Default)]
pub struct TripsQuery {
    /// Search text matched against name and destination
    pub q: Option<String>,

    /// Destinations, matched as substrings; one per `destination` key
    pub destinations: Vec<String>,

    /// Duration bucket labels, e.g. "5-7 days"
    pub duration: Option<String>,

    pub difficulty: Option<String>,

    pub season: Option<String>,

    /// Group size bucket names: Small, Medium, Large
    pub group_size: Option<String>,

    pub min_price: Option<String>,

    pub max_price: Option<String>,

    /// Minimum rating, 0 to 5
    pub rating: Option<String>,

    /// Sort key wire name; unknown keys sort as recommended
    pub sort: Option<String>,
}

/// A query parameter that could not be understood.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Bucket(#[from] InvalidBucket),

    #[error(transparent)]
    Difficulty(#[from] InvalidDifficulty),

    #[error(transparent)]
    Season(#[from] InvalidSeason),

    #[error("invalid {field}: {value:?}")]
    Number { field: &'static str, value: String },
}

impl TripsQuery {
    /// Collect decoded query-string pairs; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "destination" => {
                    query.destinations.push(value);
                    continue;
                }
                "q" => &mut query.q,
                "duration" => &mut query.duration,
                "difficulty" => &mut query.difficulty,
                "season" => &mut query.season,
                "group_size" => &mut query.group_size,
                "min_price" => &mut query.min_price,
                "max_price" => &mut query.max_price,
                "rating" => &mut query.rating,
                "sort" => &mut query.sort,
                _ => continue,
            };

            let is_list = matches!(
                key.as_str(),
                "duration" | "difficulty" | "season" | "group_size"
            );
            if is_list {
                if let Some(existing) = slot.as_mut() {
                    existing.push(',');
                    existing.push_str(&value);
                    continue;
                }
            }
            *slot = Some(value);
        }

        query
    }

    /// Build the pipeline query.
    ///
    /// Price bounds that are not given fall back to `default_price`, the
    /// catalog's filter-panel range.
    pub fn to_discovery(&self, default_price: PriceRange) -> Result<DiscoveryQuery, QueryError> {
        let filters = FilterState {
            destinations: self
                .destinations
                .iter()
                .map(|d| d.trim())
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .collect(),
            durations: parse_list::<DurationBucket>(&self.duration)?,
            difficulties: parse_list::<Difficulty>(&self.difficulty)?,
            seasons: parse_list::<Season>(&self.season)?,
            group_sizes: parse_list::<GroupSizeBucket>(&self.group_size)?,
            price_range: PriceRange::new(
                parse_number("min_price", &self.min_price)?
                    .map_or(default_price.min, Price::new),
                parse_number("max_price", &self.max_price)?
                    .map_or(default_price.max, Price::new),
            ),
            min_rating: parse_rating(&self.rating)?,
        };

        let sort = self
            .sort
            .as_deref()
            .map(SortKey::parse_or_default)
            .unwrap_or_default();

        Ok(DiscoveryQuery::search(self.search_text())
            .with_filters(filters)
            .with_sort(sort))
    }

    /// The raw search text, or "" when absent.
    pub fn search_text(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

fn non_blank(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn split_list(raw: &Option<String>) -> impl Iterator<Item = &str> {
    non_blank(raw)
        .into_iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_list<T>(raw: &Option<String>) -> Result<BTreeSet<T>, QueryError>
where
    T: FromStr + Ord,
    QueryError: From<T::Err>,
{
    split_list(raw)
        .map(|s| s.parse::<T>().map_err(QueryError::from))
        .collect()
}

fn parse_number(field: &'static str, raw: &Option<String>) -> Result<Option<u32>, QueryError> {
    non_blank(raw)
        .map(|s| {
            s.parse::<u32>().map_err(|_| QueryError::Number {
                field,
                value: s.to_string(),
            })
        })
        .transpose()
}

fn parse_rating(raw: &Option<String>) -> Result<f32, QueryError> {
    let Some(s) = non_blank(raw) else {
        return Ok(0.0);
    };

    match s.parse::<f32>() {
        Ok(r) if (0.0..=5.0).contains(&r) => Ok(r),
        _ => Err(QueryError::Number {
            field: "rating",
            value: s.to_string(),
        }),
    }
}

/// A trip in API responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripResult {
    pub id: String,
    pub name: String,
    pub destination: String,
    pub price: u32,

    /// Whole days; 0 when unknown
    pub duration_days: u16,

    /// Duration bucket label, if the duration is known
    pub duration: Option<DurationBucket>,

    pub difficulty: Difficulty,
    pub rating: f32,

    /// Maximum party size
    pub group_size: Option<u16>,
    pub group_size_bucket: Option<GroupSizeBucket>,
    pub seasons: Vec<Season>,
    pub image_url: Option<String>,
    pub description: String,
}

impl From<&Trip> for TripResult {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id.to_string(),
            name: trip.name.clone(),
            destination: trip.destination.clone(),
            price: trip.price.amount(),
            duration_days: trip.duration.days(),
            duration: trip.duration_bucket(),
            difficulty: trip.difficulty,
            rating: trip.rating.value(),
            group_size: trip.group_size.map(|g| g.max_size()),
            group_size_bucket: trip.group_size_bucket(),
            seasons: trip.seasons.clone(),
            image_url: trip.image_url.clone(),
            description: trip.description.clone(),
        }
    }
}

/// Response from the trip listing endpoint.
#[derive(Debug, Serialize)]
pub struct TripsResponse {
    pub trips: Vec<TripResult>,

    /// Number of trips after filtering
    pub total: usize,

    /// False when the catalog could not be fetched; `trips` is then empty
    pub catalog_available: bool,

    /// Generic message shown in place of results when the catalog is down
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TripsResponse {
    pub fn new(trips: &[Trip], catalog_available: bool) -> Self {
        Self {
            trips: trips.iter().map(TripResult::from).collect(),
            total: trips.len(),
            catalog_available,
            error: (!catalog_available).then(|| CATALOG_UNAVAILABLE.to_string()),
        }
    }
}

/// What users see when the catalog fetch failed.
pub const CATALOG_UNAVAILABLE: &str = "Trips are unavailable right now. Please try again later.";

/// Catalog status for operators.
#[derive(Debug, Serialize)]
pub struct CatalogStatusResponse {
    pub available: bool,
    pub trips: usize,
    pub rejected: usize,
    pub fetched_at: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    pub error: Option<String>,

    /// Email of the admin who asked
    pub requested_by: String,
}

impl CatalogStatusResponse {
    pub fn new(store: &CatalogStore, requested_by: impl Into<String>) -> Self {
        let requested_by = requested_by.into();
        match store.status() {
            CatalogStatus::Loaded {
                fetched_at,
                rejected,
            } => Self {
                available: true,
                trips: store.len(),
                rejected: *rejected,
                fetched_at: Some(*fetched_at),
                failed_at: None,
                error: None,
                requested_by,
            },
            CatalogStatus::Unavailable { failed_at, message } => Self {
                available: false,
                trips: 0,
                rejected: 0,
                fetched_at: None,
                failed_at: Some(*failed_at),
                error: Some(message.clone()),
                requested_by,
            },
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
