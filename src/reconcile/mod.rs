//! Dependency-range reconciliation across a workspace set.
//!
//! The check runs in three stages. A frequency pass over every
//! workspace picks the dominant declared range per dependency name.
//! Each declaration of the checked workspace is then tested against
//! that dominant range and the configured allow-list; every divergence
//! becomes a [`Finding`]. A finding can later be applied back to its
//! manifest with [`fix`], independently of validation.
//!
//! Each dependency name is reconciled on its own; there is no ordering
//! or batching of corrections across names.

mod correct;
mod frequency;
mod mismatch;
pub mod range;

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::manifest::DependencyKind;
use crate::core::workspace::Workspace;
use crate::util::config::Config;

pub use correct::{
    expected_range, expected_range_with, fix, ClosestAllowed, DominantOrFirst, FixOutcome,
};
pub use frequency::most_common_ranges;
pub use mismatch::is_range_mismatched;

/// One detected range mismatch.
///
/// Carries enough to report the problem and to apply the correction
/// later. Immutable once created; sections are judged separately, so a
/// dependency declared in several sections can yield several findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Name of the offending workspace.
    pub workspace: String,

    /// Directory of the offending workspace.
    pub workspace_dir: PathBuf,

    /// The dependency whose declared range diverges.
    pub dependency: String,

    /// The range the workspace currently declares.
    pub declared: String,

    /// The range the workspace should declare instead.
    pub expected: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has a dependency on {}@{} but the range should be set to {}",
            self.workspace, self.dependency, self.declared, self.expected
        )
    }
}

/// Validate one workspace against the whole workspace set.
///
/// The dominant-range map is recomputed from `all_workspaces` on every
/// call; `root_workspace` is part of the harness calling convention and
/// is not consulted. Hosts validating many workspaces in one pass can
/// compute [`most_common_ranges`] once and use [`check_workspace`]
/// directly.
pub fn validate(
    workspace: &Workspace,
    all_workspaces: &[Workspace],
    _root_workspace: &Workspace,
    config: &Config,
) -> Vec<Finding> {
    let dominant = most_common_ranges(all_workspaces);
    check_workspace(workspace, &dominant, config)
}

/// Check one workspace's declarations against a dominant-range map.
///
/// Findings come out in section order (regular, development, peer,
/// optional), then dependency-name order within each section.
pub fn check_workspace(
    workspace: &Workspace,
    dominant: &BTreeMap<String, String>,
    config: &Config,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for kind in DependencyKind::ALL {
        if let Some(deps) = workspace.manifest().dependencies(kind) {
            for (name, declared) in deps {
                let allowed = config.allowed_versions(name);
                let most_common = dominant.get(name).map(String::as_str);

                if is_range_mismatched(declared, most_common, allowed, kind.is_peer()) {
                    findings.push(Finding {
                        workspace: workspace.name().to_string(),
                        workspace_dir: workspace.dir().to_path_buf(),
                        dependency: name.clone(),
                        declared: declared.clone(),
                        expected: expected_range(declared, most_common, allowed),
                    });
                }
            }
        }
    }

    if !findings.is_empty() {
        tracing::debug!(
            "`{}` declares {} mismatched dependency range(s)",
            workspace.name(),
            findings.len()
        );
    }

    findings
}
