//! Dominant-range computation over a workspace set.

use std::collections::{BTreeMap, HashMap};

use crate::core::manifest::DependencyKind;
use crate::core::workspace::Workspace;

/// Compute the dominant declared range for every dependency name that
/// appears anywhere in the workspace set.
///
/// Every declaration counts, across all four sections of every
/// workspace, invalid specifiers included. The scan is a single pass in
/// the given workspace order, section order, then name order within a
/// section; a newly observed range whose count reaches the running best
/// count replaces it, so on a tie the most recently observed range wins.
/// Callers must therefore present workspaces in a stable order.
///
/// The result depends only on the workspace set, never on whichever
/// workspace is later checked against it.
pub fn most_common_ranges(workspaces: &[Workspace]) -> BTreeMap<String, String> {
    let mut counts: HashMap<&str, HashMap<&str, u32>> = HashMap::new();
    let mut best: BTreeMap<&str, (&str, u32)> = BTreeMap::new();

    for workspace in workspaces {
        for kind in DependencyKind::ALL {
            if let Some(deps) = workspace.manifest().dependencies(kind) {
                for (name, range) in deps {
                    let count = {
                        let seen = counts
                            .entry(name.as_str())
                            .or_default()
                            .entry(range.as_str())
                            .or_insert(0);
                        *seen += 1;
                        *seen
                    };

                    let entry = best.entry(name.as_str()).or_insert((range.as_str(), 0));
                    if count >= entry.1 {
                        *entry = (range.as_str(), count);
                    }
                }
            }
        }
    }

    tracing::debug!(
        "computed dominant ranges for {} dependencies across {} workspaces",
        best.len(),
        workspaces.len()
    );

    best.into_iter()
        .map(|(name, (range, _))| (name.to_string(), range.to_string()))
        .collect()
}
