//! Object types and identities
//!
//! The repository stores two kinds of things, both identified by SHA-1 hashes:
//!
//! - **Blob**: File content (raw bytes)
//! - **Commit**: Snapshot with metadata (timestamp, message, parent, tracked files)

pub mod blob;
pub mod commit;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
