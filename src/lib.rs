//! Convoy - dependency-range consistency checking for monorepo workspaces.
//!
//! Given the set of workspaces in a monorepo, convoy finds declarations
//! whose version range for an external dependency diverges from the
//! range used elsewhere, computes the range they should declare, and
//! applies the correction back into the manifest. Workspace discovery,
//! check registration, and persistence belong to the host linter; this
//! crate is the reconciliation core.

pub mod core;
pub mod reconcile;
pub mod util;

/// Test fixtures for convoy unit tests.
///
/// Only available when compiling tests.
#[cfg(test)]
pub mod test_support;

pub use crate::core::manifest::{DependencyKind, DependencySection, Manifest, ManifestError};
pub use crate::core::workspace::Workspace;
pub use crate::reconcile::{
    check_workspace, expected_range, expected_range_with, fix, is_range_mismatched,
    most_common_ranges, validate, ClosestAllowed, DominantOrFirst, Finding, FixOutcome,
};
pub use crate::util::config::{Config, ConfigError};
