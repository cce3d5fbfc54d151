//! Workspace fixture builders.

use crate::core::manifest::{DependencyKind, Manifest};
use crate::core::workspace::Workspace;

/// A workspace with an empty manifest, rooted under a fake directory.
pub fn workspace(name: &str) -> Workspace {
    let manifest = Manifest {
        name: name.to_string(),
        version: Some("1.0.0".to_string()),
        ..Default::default()
    };
    Workspace::new(format!("packages/{name}"), manifest)
}

/// A workspace declaring the given ranges in one dependency section.
pub fn workspace_with(name: &str, kind: DependencyKind, deps: &[(&str, &str)]) -> Workspace {
    let mut workspace = workspace(name);
    for (dep, range) in deps {
        workspace.manifest_mut().set_dependency(kind, *dep, *range);
    }
    workspace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_with_declares_ranges() {
        let ws = workspace_with(
            "pkg-1",
            DependencyKind::Peer,
            &[("react", "16.0.0 || 17.0.0")],
        );

        assert_eq!(ws.name(), "pkg-1");
        assert_eq!(
            ws.manifest()
                .dependencies(DependencyKind::Peer)
                .and_then(|deps| deps.get("react"))
                .map(String::as_str),
            Some("16.0.0 || 17.0.0")
        );
    }
}
