//! sprig: a single-user, local version-control core
//!
//! An immutable commit graph, a blob store keyed by commit, a staging area and
//! a three-way merge with conflict detection, driven by the `sprig` binary.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
