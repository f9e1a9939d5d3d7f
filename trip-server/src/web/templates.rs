//! Askama templates for the web frontend.

use askama::Template;

use crate::discovery::{DiscoveryQuery, FacetOptions, PriceRange, SortKey};
use crate::domain::{Difficulty, DurationBucket, GroupSizeBucket, Season, Trip};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Discovery page: filter panel plus results.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub search: String,
    pub sort_options: Vec<SortOptionView>,
    pub destinations: Vec<ChoiceView>,
    pub durations: Vec<ChoiceView>,
    pub difficulties: Vec<ChoiceView>,
    pub seasons: Vec<ChoiceView>,
    pub group_sizes: Vec<ChoiceView>,
    pub min_price: u32,
    pub max_price: u32,
    /// Rating floor as typed; empty when unset
    pub rating: String,
    pub active_filters: usize,
    pub results: TripListTemplate,
}

impl IndexTemplate {
    /// Build the page for `query` over a catalog summarized by `options`.
    ///
    /// `baseline` is the catalog's default price range; a price range equal
    /// to it does not count as an active filter.
    pub fn new(
        query: &DiscoveryQuery,
        options: &FacetOptions,
        baseline: PriceRange,
        results: TripListTemplate,
    ) -> Self {
        let filters = &query.filters;

        Self {
            search: query.search.clone(),
            sort_options: SortOptionView::all(query.sort),
            destinations: options
                .destinations
                .iter()
                .map(|d| ChoiceView::new(d, filters.destinations.contains(d)))
                .collect(),
            durations: DurationBucket::ALL
                .iter()
                .map(|b| ChoiceView::new(b.as_str(), filters.durations.contains(b)))
                .collect(),
            difficulties: Difficulty::ALL
                .iter()
                .map(|d| ChoiceView::new(d.as_str(), filters.difficulties.contains(d)))
                .collect(),
            seasons: Season::ALL
                .iter()
                .map(|s| ChoiceView::new(s.as_str(), filters.seasons.contains(s)))
                .collect(),
            group_sizes: GroupSizeBucket::ALL
                .iter()
                .map(|g| ChoiceView::new(g.as_str(), filters.group_sizes.contains(g)))
                .collect(),
            min_price: filters.price_range.min.amount(),
            max_price: filters.price_range.max.amount(),
            rating: if filters.min_rating > 0.0 {
                filters.min_rating.to_string()
            } else {
                String::new()
            },
            active_filters: filters.active_count(baseline),
            results,
        }
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Trip list fragment (discovery results).
#[derive(Template)]
#[template(path = "trip_list.html")]
pub struct TripListTemplate {
    pub trips: Vec<TripCardView>,
    pub total: usize,
    /// Shown instead of results when the catalog could not be fetched
    pub unavailable: Option<String>,
}

impl TripListTemplate {
    pub fn new(trips: &[Trip], unavailable: Option<String>) -> Self {
        Self {
            trips: trips.iter().map(TripCardView::from_trip).collect(),
            total: trips.len(),
            unavailable,
        }
    }

    pub fn unavailable_message(&self) -> &str {
        self.unavailable.as_deref().unwrap_or_default()
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One entry in the sort dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl SortOptionView {
    pub fn all(current: SortKey) -> Vec<Self> {
        SortKey::ALL
            .into_iter()
            .map(|key| SortOptionView {
                value: key.as_str(),
                label: key.label(),
                selected: key == current,
            })
            .collect()
    }
}

/// A checkbox in the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub value: String,
    pub checked: bool,
}

impl ChoiceView {
    pub fn new(value: impl Into<String>, checked: bool) -> Self {
        Self {
            value: value.into(),
            checked,
        }
    }
}

/// Trip card view model.
#[derive(Debug, Clone)]
pub struct TripCardView {
    pub id: String,
    pub name: String,
    pub destination: String,
    pub price: String,
    /// Empty when the duration is unknown
    pub duration: String,
    pub difficulty: &'static str,
    pub rating: String,
    /// Empty when the group size is unknown
    pub group_size: String,
    pub seasons: String,
    /// Empty when the trip has no image
    pub image_url: String,
    pub description: String,
}

impl TripCardView {
    /// Create from a domain Trip.
    pub fn from_trip(trip: &Trip) -> Self {
        let duration = if trip.duration.days() > 0 {
            trip.duration.to_string()
        } else {
            String::new()
        };

        let seasons = trip
            .seasons
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: trip.id.to_string(),
            name: trip.name.clone(),
            destination: trip.destination.clone(),
            price: group_thousands(trip.price.amount()),
            duration,
            difficulty: trip.difficulty.as_str(),
            rating: trip.rating.to_string(),
            group_size: trip.group_size.map(|g| g.to_string()).unwrap_or_default(),
            seasons,
            image_url: trip.image_url.clone().unwrap_or_default(),
            description: trip.description.clone(),
        }
    }

    /// CSS modifier for the difficulty badge.
    pub fn difficulty_class(&self) -> String {
        self.difficulty.to_ascii_lowercase()
    }
}

/// Format a price with comma thousands separators, e.g. "21,150".
fn group_thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
