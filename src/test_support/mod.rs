//! Test fixtures for convoy unit tests.
//!
//! Only compiled for tests; provides ready-made workspaces so tests can
//! describe a monorepo in a line or two.

pub mod fixtures;

pub use fixtures::{workspace, workspace_with};
