//! Merge algorithms
//!
//! - `split_point`: nearest commit shared by two branch heads
//! - `resolution`: per-file three-way decisions and conflict bodies

pub mod resolution;
pub mod split_point;
