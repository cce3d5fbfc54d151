//! Workspace identity and manifest access.
//!
//! A workspace is one package within the monorepo: a directory plus the
//! manifest found there. The caller owns discovery and loading; convoy
//! only reads workspaces and, when applying a fix, mutates the manifest
//! in place.

use std::path::{Path, PathBuf};

use crate::core::manifest::Manifest;

/// One monorepo workspace: a directory and its manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Directory containing the manifest.
    dir: PathBuf,

    /// The workspace's manifest.
    manifest: Manifest,
}

impl Workspace {
    /// Create a workspace from its directory and parsed manifest.
    pub fn new(dir: impl Into<PathBuf>, manifest: Manifest) -> Self {
        Workspace {
            dir: dir.into(),
            manifest,
        }
    }

    /// The workspace name, as declared by its manifest.
    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    /// The workspace directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get the manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Get the manifest for in-place correction.
    pub fn manifest_mut(&mut self) -> &mut Manifest {
        &mut self.manifest
    }
}
