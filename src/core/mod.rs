//! Core data structures for convoy.
//!
//! This module contains the types the reconciliation logic operates on:
//! manifests with their dependency-declaration sections, and the
//! workspaces that own them.

pub mod manifest;
pub mod workspace;

pub use manifest::{DependencyKind, DependencySection, Manifest, ManifestError};
pub use workspace::Workspace;
