//! Range-string helpers and the validity check.
//!
//! Ranges are treated as opaque strings everywhere except here. The one
//! piece of structure this module understands is the `||` alternation
//! used by peer dependencies; everything about the range grammar itself
//! is delegated to the `semver` crate.

use semver::VersionReq;

/// Separator between alternatives in a peer-dependency range.
pub const RANGE_OR: &str = "||";

/// Whether a range string is an alternation of several ranges.
pub fn is_alternation(range: &str) -> bool {
    range.contains(RANGE_OR)
}

/// Split an alternation into its trimmed alternatives.
///
/// A range without a separator yields itself as the single alternative.
pub fn split_alternation(range: &str) -> Vec<&str> {
    range.split(RANGE_OR).map(str::trim).collect()
}

/// Join ranges back into an alternation, in the given order.
pub fn join_alternation<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&format!(" {RANGE_OR} "))
}

/// The first alternative of a range, trimmed.
pub fn first_alternative(range: &str) -> &str {
    range.split(RANGE_OR).next().unwrap_or(range).trim()
}

/// Whether a string parses as a version-range expression.
///
/// Non-semver specifiers (git references, URLs, tags) fail this check
/// and are never eligible for reconciliation.
pub fn is_valid_range(range: &str) -> bool {
    VersionReq::parse(range).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_detection() {
        assert!(is_alternation("1.0.0 || 2.0.0"));
        assert!(is_alternation("1.0.0||2.0.0"));
        assert!(!is_alternation("^1.0.0"));
    }

    #[test]
    fn test_split_trims_alternatives() {
        assert_eq!(
            split_alternation(" 1.0.0 ||  2.0.0 || 3.0.0"),
            vec!["1.0.0", "2.0.0", "3.0.0"]
        );
        assert_eq!(split_alternation("^1.0.0"), vec!["^1.0.0"]);
    }

    #[test]
    fn test_join_alternation() {
        let parts = ["1.0.0".to_string(), "3.0.0".to_string()];
        assert_eq!(join_alternation(&parts), "1.0.0 || 3.0.0");
        assert_eq!(join_alternation(&["2.0.0"]), "2.0.0");
    }

    #[test]
    fn test_first_alternative() {
        assert_eq!(first_alternative("1.0.0 || 2.0.0"), "1.0.0");
        assert_eq!(first_alternative("  ^1.2.0  "), "^1.2.0");
    }

    #[test]
    fn test_valid_ranges() {
        assert!(is_valid_range("1.0.0"));
        assert!(is_valid_range("^1.2.3"));
        assert!(is_valid_range("~0.4"));
        assert!(is_valid_range(">=1.0, <2.0"));
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(!is_valid_range("git:x"));
        assert!(!is_valid_range("https://example.com/pkg.tgz"));
        assert!(!is_valid_range("1.0.0 || 2.0.0"));
    }
}
