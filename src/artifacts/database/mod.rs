//! Blob store types
//!
//! Types shared between the blob store and the commits that reference it.

pub mod blob_location;
