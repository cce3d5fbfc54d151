//! The mismatch decision for a single declared range.

use crate::reconcile::range::{is_alternation, is_valid_range, split_alternation};

/// Decide whether a declared range diverges from the rest of the
/// monorepo.
///
/// For everything except a peer-dependency alternation, the declared
/// range is mismatched when all three hold: a dominant range exists and
/// is a different string, the declared range is not in the allow-list
/// verbatim, and the declared range parses as a valid range expression.
/// Comparison is textual on purpose: `^1.0.0` and `1.0.0` count as a
/// mismatch even though they admit the same versions.
///
/// A peer-dependency alternation is judged alternative by alternative:
/// it is mismatched when any trimmed alternative is both valid and
/// outside the allow-list. The dominant range plays no part in that
/// branch.
///
/// Specifiers that fail the validity check (git references, URLs) are
/// never mismatched.
pub fn is_range_mismatched(
    declared: &str,
    dominant: Option<&str>,
    allowed: &[String],
    is_peer: bool,
) -> bool {
    let not_dominant = |range: &str| dominant.is_some_and(|d| d != range);
    let not_allowed = |range: &str| !allowed.iter().any(|a| a.as_str() == range);

    if !is_peer || !is_alternation(declared) {
        return not_dominant(declared) && not_allowed(declared) && is_valid_range(declared);
    }

    split_alternation(declared)
        .into_iter()
        .any(|alternative| not_allowed(alternative) && is_valid_range(alternative))
}
