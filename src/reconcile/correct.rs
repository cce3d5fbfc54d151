//! Expected-range computation and fix application.

use serde::Serialize;

use crate::core::manifest::{DependencyKind, Manifest};
use crate::reconcile::range::{first_alternative, is_alternation, join_alternation};
use crate::reconcile::Finding;

/// Selection of the allow-list entry that replaces an out-of-list range.
///
/// The pick must be a member of `allowed` (which is never empty) and
/// deterministic for a fixed input pair; `expected_range_with` asserts
/// membership. What "closest" means is up to the implementation.
pub trait ClosestAllowed {
    /// Pick the allow-list entry that should replace `declared`.
    fn pick<'a>(&self, declared: &str, allowed: &'a [String]) -> &'a str;
}

/// Default selection: the allow-list entry already dominant across the
/// workspace set, falling back to the first configured entry.
#[derive(Debug, Clone, Default)]
pub struct DominantOrFirst {
    dominant: Option<String>,
}

impl DominantOrFirst {
    /// Create a strategy aware of the dependency's dominant range.
    pub fn new(dominant: Option<&str>) -> Self {
        DominantOrFirst {
            dominant: dominant.map(str::to_string),
        }
    }
}

impl ClosestAllowed for DominantOrFirst {
    fn pick<'a>(&self, _declared: &str, allowed: &'a [String]) -> &'a str {
        match self
            .dominant
            .as_deref()
            .and_then(|dominant| allowed.iter().find(|a| a.as_str() == dominant))
        {
            Some(hit) => hit.as_str(),
            None => allowed[0].as_str(),
        }
    }
}

/// Compute the range a mismatched declaration should be corrected to,
/// using the default [`DominantOrFirst`] strategy.
pub fn expected_range(declared: &str, dominant: Option<&str>, allowed: &[String]) -> String {
    expected_range_with(declared, dominant, allowed, &DominantOrFirst::new(dominant))
}

/// Compute the corrected range with an explicit closest-range strategy.
///
/// Three mutually exclusive policies:
/// - no allow-list: the dominant range, or for a peer alternation with
///   no dominant, its first alternative;
/// - allow-list and the declaration is an alternation: the allow-list
///   itself, re-joined as alternatives in configured order;
/// - allow-list and a single declared range: the strategy's pick.
pub fn expected_range_with(
    declared: &str,
    dominant: Option<&str>,
    allowed: &[String],
    strategy: &dyn ClosestAllowed,
) -> String {
    if allowed.is_empty() {
        return match dominant {
            Some(range) => range.to_string(),
            None => first_alternative(declared).to_string(),
        };
    }

    if is_alternation(declared) {
        return join_alternation(allowed);
    }

    let pick = strategy.pick(declared, allowed);
    assert!(
        allowed.iter().any(|a| a == pick),
        "closest-range strategy returned `{pick}`, which is not in the allow-list"
    );
    pick.to_string()
}

/// Outcome of applying a fix to a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixOutcome {
    /// Dependent packages must be reinstalled after the correction.
    pub requires_install: bool,
}

/// Write a finding's expected range into the manifest.
///
/// Every section declaring the dependency is overwritten with the same
/// expected range, even though each section was judged separately; when
/// sections disagreed, the last finding applied wins. The manifest is
/// only mutated in memory; persisting it is the caller's job, and the
/// returned outcome tells the caller a reinstall is due.
pub fn fix(finding: &Finding, manifest: &mut Manifest) -> FixOutcome {
    for kind in DependencyKind::ALL {
        if let Some(deps) = manifest.dependencies_mut(kind) {
            if let Some(range) = deps.get_mut(&finding.dependency) {
                tracing::trace!(
                    "rewriting {} range for `{}`: {} -> {}",
                    kind,
                    finding.dependency,
                    range,
                    finding.expected
                );
                *range = finding.expected.clone();
            }
        }
    }

    FixOutcome {
        requires_install: true,
    }
}
