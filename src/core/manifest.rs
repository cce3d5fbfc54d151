//! Workspace manifest schema and section access.
//!
//! A manifest carries up to four independent dependency-declaration
//! sections. Each section maps a dependency name to a version-range
//! string; the same name may appear in several sections with different
//! ranges, and each occurrence is reconciled on its own.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four dependency-declaration sections a manifest may hold.
///
/// `ALL` fixes the traversal order used everywhere in the crate:
/// regular, development, peer, optional. Peer sections are the only
/// ones where alternation ranges (`1.x || 2.x`) are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    /// Regular runtime dependencies.
    Normal,
    /// Development-only dependencies.
    Development,
    /// Peer dependencies.
    Peer,
    /// Optional dependencies.
    Optional,
}

impl DependencyKind {
    /// All section kinds, in traversal order.
    pub const ALL: [DependencyKind; 4] = [
        DependencyKind::Normal,
        DependencyKind::Development,
        DependencyKind::Peer,
        DependencyKind::Optional,
    ];

    /// The section key as it appears in a serialized manifest.
    pub fn section(self) -> &'static str {
        match self {
            DependencyKind::Normal => "dependencies",
            DependencyKind::Development => "devDependencies",
            DependencyKind::Peer => "peerDependencies",
            DependencyKind::Optional => "optionalDependencies",
        }
    }

    /// Whether this section holds peer dependencies.
    pub fn is_peer(self) -> bool {
        matches!(self, DependencyKind::Peer)
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

/// A dependency section: name to declared range, ordered by name.
pub type DependencySection = BTreeMap<String, String>;

/// A parsed workspace manifest.
///
/// Unknown fields are ignored so the full host manifest can be fed in
/// unchanged; only the name and the dependency sections matter here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Package name.
    pub name: String,

    /// Package version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Regular dependencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependencySection>,

    /// Development dependencies.
    #[serde(rename = "devDependencies", skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<DependencySection>,

    /// Peer dependencies.
    #[serde(rename = "peerDependencies", skip_serializing_if = "Option::is_none")]
    pub peer_dependencies: Option<DependencySection>,

    /// Optional dependencies.
    #[serde(
        rename = "optionalDependencies",
        skip_serializing_if = "Option::is_none"
    )]
    pub optional_dependencies: Option<DependencySection>,
}

impl Manifest {
    /// Parse a manifest from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(json).map_err(ManifestError::Parse)
    }

    /// Serialize the manifest back to JSON.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        serde_json::to_string_pretty(self).map_err(ManifestError::Serialize)
    }

    /// Get a dependency section by kind, if the manifest declares one.
    pub fn dependencies(&self, kind: DependencyKind) -> Option<&DependencySection> {
        self.section_ref(kind).as_ref()
    }

    /// Get a mutable dependency section by kind.
    pub fn dependencies_mut(&mut self, kind: DependencyKind) -> Option<&mut DependencySection> {
        self.section_mut(kind).as_mut()
    }

    /// Declare a dependency range, creating the section if needed.
    pub fn set_dependency(
        &mut self,
        kind: DependencyKind,
        name: impl Into<String>,
        range: impl Into<String>,
    ) {
        self.section_mut(kind)
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), range.into());
    }

    fn section_ref(&self, kind: DependencyKind) -> &Option<DependencySection> {
        match kind {
            DependencyKind::Normal => &self.dependencies,
            DependencyKind::Development => &self.dev_dependencies,
            DependencyKind::Peer => &self.peer_dependencies,
            DependencyKind::Optional => &self.optional_dependencies,
        }
    }

    fn section_mut(&mut self, kind: DependencyKind) -> &mut Option<DependencySection> {
        match kind {
            DependencyKind::Normal => &mut self.dependencies,
            DependencyKind::Development => &mut self.dev_dependencies,
            DependencyKind::Peer => &mut self.peer_dependencies,
            DependencyKind::Optional => &mut self.optional_dependencies,
        }
    }
}

/// Error at the manifest JSON boundary.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to parse manifest JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[source] serde_json::Error),
}
