//! Season tags.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error returned when parsing an unknown season tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid season: {value:?}")]
pub struct InvalidSeason {
    value: String,
}

/// A season in which a trip runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Monsoon,
    Autumn,
    Winter,
    #[serde(rename = "All Year")]
    AllYear,
}

impl Season {
    pub const ALL: [Season; 6] = [
        Season::Spring,
        Season::Summer,
        Season::Monsoon,
        Season::Autumn,
        Season::Winter,
        Season::AllYear,
    ];

    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::AllYear => "All Year",
        }
    }
}

impl FromStr for Season {
    type Err = InvalidSeason;

    /// Case-insensitive. Accepts "Fall" for autumn and "all-year"/"allyear"
    /// spellings for year-round trips.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "monsoon" => Ok(Season::Monsoon),
            "autumn" | "fall" => Ok(Season::Autumn),
            "winter" => Ok(Season::Winter),
            "allyear" | "yearround" => Ok(Season::AllYear),
            _ => Err(InvalidSeason {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
