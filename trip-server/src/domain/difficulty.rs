//! Trip difficulty grade.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Error returned when parsing an unknown difficulty label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid difficulty: {value:?} (expected Easy, Moderate, Hard or Extreme)")]
pub struct InvalidDifficulty {
    value: String,
}

/// How physically demanding a trip is.
///
/// # Examples
///
/// ```
/// use trip_server::domain::Difficulty;
///
/// let d: Difficulty = "moderate".parse().unwrap();
/// assert_eq!(d, Difficulty::Moderate);
/// assert_eq!(d.as_str(), "Moderate");
///
/// assert!("Impossible".parse::<Difficulty>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
    Extreme,
}

impl Difficulty {
    /// All grades, easiest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    /// Returns the display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        }
    }
}

impl FromStr for Difficulty {
    type Err = InvalidDifficulty;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidDifficulty {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_grades() {
        assert_eq!("Easy".parse(), Ok(Difficulty::Easy));
        assert_eq!("MODERATE".parse(), Ok(Difficulty::Moderate));
        assert_eq!(" hard ".parse(), Ok(Difficulty::Hard));
        assert_eq!("extreme".parse(), Ok(Difficulty::Extreme));
    }

    #[test]
    fn reject_unknown() {
        assert!("".parse::<Difficulty>().is_err());
        assert!("Medium".parse::<Difficulty>().is_err());
        assert!("Easy-ish".parse::<Difficulty>().is_err());
    }

    #[test]
    fn ordering_follows_grade() {
        assert!(Difficulty::Easy < Difficulty::Moderate);
        assert!(Difficulty::Hard < Difficulty::Extreme);
    }

    #[test]
    fn error_display() {
        let err = "Medium".parse::<Difficulty>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid difficulty: \"Medium\" (expected Easy, Moderate, Hard or Extreme)"
        );
    }
}
