//! Checkout planning
//!
//! Switching branches and resetting replace the working directory wholesale.
//! This module plans those replacements as a [`migration::Migration`] and
//! detects untracked files the replacement would clobber, before any file is
//! touched.

pub mod migration;
