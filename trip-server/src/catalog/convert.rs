//! Conversion from catalog DTOs to domain types.
//!
//! This is the one place malformed backend records are dealt with: required
//! fields missing or invalid reject the record, missing numbers are coerced
//! to zero. Nothing downstream re-validates.

use tracing::warn;

use crate::domain::{
    Difficulty, GroupSize, InvalidDifficulty, InvalidPrice, InvalidRating, Price, Rating, Season,
    Trip, TripDuration, TripId,
};

use super::types::{DurationDto, GroupSizeDto, IdDto, TripDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Missing or blank required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    InvalidDifficulty(#[from] InvalidDifficulty),

    #[error(transparent)]
    InvalidPrice(#[from] InvalidPrice),

    #[error(transparent)]
    InvalidRating(#[from] InvalidRating),

    /// Duration that is negative, out of range, or unreadable
    #[error("invalid duration: {0}")]
    InvalidDuration(String),
}

/// Result of converting a whole catalog response.
#[derive(Debug, Default)]
pub struct ConvertedCatalog {
    /// Valid trips, in backend order.
    pub trips: Vec<Trip>,
    /// Number of records that were skipped.
    pub rejected: usize,
}

/// Convert every record, skipping (and logging) the ones that fail.
///
/// Backend order is preserved; it is the "recommended" ordering.
pub fn convert_catalog(dtos: &[TripDto]) -> ConvertedCatalog {
    let mut converted = ConvertedCatalog {
        trips: Vec::with_capacity(dtos.len()),
        rejected: 0,
    };

    for (index, dto) in dtos.iter().enumerate() {
        match convert_trip(dto) {
            Ok(trip) => converted.trips.push(trip),
            Err(e) => {
                warn!(index, id = ?dto.id, error = %e, "skipping catalog record");
                converted.rejected += 1;
            }
        }
    }

    converted
}

/// Convert a single backend record.
pub fn convert_trip(dto: &TripDto) -> Result<Trip, ConversionError> {
    let id = match dto.id.as_ref().ok_or(ConversionError::MissingField("id"))? {
        IdDto::Text(s) => non_blank(s, "id")?.to_string(),
        IdDto::Number(n) => n.to_string(),
    };

    let name = non_blank_opt(dto.name.as_deref(), "name")?;
    let destination = non_blank_opt(dto.destination.as_deref(), "destination")?;

    let difficulty: Difficulty = non_blank_opt(dto.difficulty.as_deref(), "difficulty")?.parse()?;

    let price = match dto.price {
        Some(amount) => Price::from_f64(amount)?,
        None => Price::default(),
    };

    let rating = match dto.rating {
        Some(score) => Rating::new(score)?,
        None => Rating::default(),
    };

    let duration = match &dto.duration {
        None => TripDuration::default(),
        Some(DurationDto::Days(days)) => duration_from_days(*days)?,
        Some(DurationDto::Label(label)) => TripDuration::parse_label(label)
            .ok_or_else(|| ConversionError::InvalidDuration(label.clone()))?,
    };

    let group_size = match &dto.group_size {
        None => None,
        Some(GroupSizeDto::Count(count)) => group_size_from_count(*count),
        Some(GroupSizeDto::Label(label)) => GroupSize::parse_label(label),
    };

    let seasons = dto
        .season
        .as_ref()
        .map(|s| parse_seasons(s.tags(), &id))
        .unwrap_or_default();

    Ok(Trip {
        id: TripId::new(id),
        name: name.to_string(),
        destination: destination.to_string(),
        price,
        duration,
        difficulty,
        rating,
        group_size,
        seasons,
        image_url: dto.image.clone().filter(|url| !url.trim().is_empty()),
        description: dto.description.clone().unwrap_or_default(),
    })
}

fn non_blank<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ConversionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::MissingField(field));
    }
    Ok(trimmed)
}

fn non_blank_opt<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ConversionError> {
    non_blank(value.ok_or(ConversionError::MissingField(field))?, field)
}

fn duration_from_days(days: f64) -> Result<TripDuration, ConversionError> {
    if !days.is_finite() || days < 0.0 || days.round() > u16::MAX as f64 {
        return Err(ConversionError::InvalidDuration(days.to_string()));
    }
    Ok(TripDuration::from_days(days.round() as u16))
}

fn group_size_from_count(count: f64) -> Option<GroupSize> {
    if !count.is_finite() || count < 0.0 || count.round() > u16::MAX as f64 {
        return None;
    }
    GroupSize::new(count.round() as u16)
}

/// Parse season tags, dropping unknown ones and duplicates.
fn parse_seasons(tags: &[String], trip_id: &str) -> Vec<Season> {
    let mut seasons = Vec::with_capacity(tags.len());
    for tag in tags {
        match tag.parse::<Season>() {
            Ok(season) if !seasons.contains(&season) => seasons.push(season),
            Ok(_) => {}
            Err(e) => warn!(trip_id, error = %e, "dropping unknown season tag"),
        }
    }
    seasons
}
