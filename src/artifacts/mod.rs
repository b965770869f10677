//! Version-control data structures and algorithms
//!
//! - `branch`: branch names and HEAD aliases
//! - `checkout`: checkout planning and the untracked-file safety check
//! - `core`: shared utilities (pager wrapper, output selection)
//! - `database`: blob store locations
//! - `merge`: split point search and three-way file resolution
//! - `objects`: blobs, commits and their ids
//! - `status`: working tree status classification

pub mod branch;
pub mod checkout;
pub mod core;
pub mod database;
pub mod merge;
pub mod objects;
pub mod status;
