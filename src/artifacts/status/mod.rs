//! Working tree status inspection
//!
//! Compares the working directory against the staging area and the HEAD
//! commit.
//!
//! ## Components
//!
//! - `file_change`: kinds of unstaged modification and their labels
//! - `status_info`: classification and the printed report

pub mod file_change;
pub mod status_info;
