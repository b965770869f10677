//! Command implementations
//!
//! - `porcelain`: user-facing version control operations (add, commit, merge, etc.)

pub mod porcelain;
