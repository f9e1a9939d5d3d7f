//! Helpers for the free-text labels the backend sends in place of numbers.

/// Extract every run of ASCII digits from a label, in order.
///
/// Runs too large for a `u32` are skipped.
pub(crate) fn numbers_in(label: &str) -> Vec<u32> {
    label
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse().ok())
        .collect()
}

/// Lowercase a label and drop everything but letters, digits and `+`.
///
/// Lets "5-7 Days", "5 - 7 days" and "5-7days" compare equal.
pub(crate) fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '+')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_in_ranges() {
        assert_eq!(numbers_in("5-7 days"), vec![5, 7]);
        assert_eq!(numbers_in("15+ days"), vec![15]);
        assert_eq!(numbers_in("8 - 12 people"), vec![8, 12]);
        assert_eq!(numbers_in("one week"), Vec::<u32>::new());
    }

    #[test]
    fn numbers_in_skips_overflow() {
        assert_eq!(numbers_in("99999999999 or 4"), vec![4]);
    }

    #[test]
    fn normalize_ignores_spacing_and_case() {
        assert_eq!(normalize("5-7 Days"), "57days");
        assert_eq!(normalize("5 - 7 days"), "57days");
        assert_eq!(normalize("15+ days"), "15+days");
    }
}
