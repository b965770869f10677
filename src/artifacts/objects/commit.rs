//! Commit node
//!
//! A commit is an immutable snapshot of the tracked files together with:
//! - A creation timestamp and a message
//! - The id of its parent commit (none for the root)
//! - The content hash of every tracked file
//! - The blob store location of every tracked file
//!
//! ## Construction
//!
//! Commits are built in two phases. A [`CommitBuilder`] fixes everything that
//! contributes to the identity hash and exposes the id, so the caller can
//! store the staged blobs under that id. [`CommitBuilder::build`] then attaches
//! the blob locations and yields the final [`Commit`]. Nothing mutates a commit
//! after it has been built.
//!
//! ## Identity
//!
//! ```text
//! root:  sha1(timestamp ‖ message)
//! other: sha1(tracked-key ‖ parent-id ‖ timestamp ‖ message)
//! ```
//!
//! where the tracked key lists every `name:content-hash` pair in name order.

use crate::artifacts::database::blob_location::BlobLocation;
use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Message of the commit created by `init`
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Filename to content hash
pub type TrackedFiles = BTreeMap<PathBuf, ObjectId>;
/// Filename to blob store location
pub type BlobLocations = BTreeMap<PathBuf, BlobLocation>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    id: ObjectId,
    timestamp: String,
    message: String,
    tracked_files: TrackedFiles,
    blob_locations: BlobLocations,
    parent: Option<ObjectId>,
}

impl Commit {
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn tracked_files(&self) -> &TrackedFiles {
        &self.tracked_files
    }

    pub fn blob_locations(&self) -> &BlobLocations {
        &self.blob_locations
    }

    pub fn tracks(&self, file: &Path) -> bool {
        self.tracked_files.contains_key(file)
    }

    /// Content hash recorded for `file`, if tracked
    pub fn file_oid(&self, file: &Path) -> Option<&ObjectId> {
        self.tracked_files.get(file)
    }

    pub fn blob_location(&self, file: &Path) -> Option<&BlobLocation> {
        self.blob_locations.get(file)
    }

    /// Format the commit the way `log` and `global-log` print it
    pub fn log_entry(&self) -> String {
        format!(
            "===\nCommit {}\n{}\n{}\n",
            self.id, self.timestamp, self.message
        )
    }
}

impl PartialEq for Commit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Commit {}

/// First construction phase of a [`Commit`]
///
/// Holds the identity-bearing fields and the precomputed id.
#[derive(Debug, Clone)]
pub struct CommitBuilder {
    id: ObjectId,
    timestamp: String,
    message: String,
    tracked_files: TrackedFiles,
    parent: Option<ObjectId>,
}

impl CommitBuilder {
    /// Start the parentless root commit
    pub fn root(timestamp: String, message: String) -> Self {
        let id = ObjectId::hash_parts([timestamp.as_bytes(), message.as_bytes()]);

        CommitBuilder {
            id,
            timestamp,
            message,
            tracked_files: TrackedFiles::new(),
            parent: None,
        }
    }

    /// Start a commit on top of `parent`
    pub fn child(
        timestamp: String,
        message: String,
        tracked_files: TrackedFiles,
        parent: &Commit,
    ) -> Self {
        let tracked_key = Self::tracked_key(&tracked_files);
        let id = ObjectId::hash_parts([
            tracked_key.as_bytes(),
            parent.id().as_ref().as_bytes(),
            timestamp.as_bytes(),
            message.as_bytes(),
        ]);

        CommitBuilder {
            id,
            timestamp,
            message,
            tracked_files,
            parent: Some(parent.id().clone()),
        }
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn tracked_files(&self) -> &TrackedFiles {
        &self.tracked_files
    }

    /// Attach the blob locations and publish the commit
    pub fn build(self, blob_locations: BlobLocations) -> Commit {
        Commit {
            id: self.id,
            timestamp: self.timestamp,
            message: self.message,
            tracked_files: self.tracked_files,
            blob_locations,
            parent: self.parent,
        }
    }

    fn tracked_key(tracked_files: &TrackedFiles) -> String {
        let pairs = tracked_files
            .iter()
            .map(|(file, oid)| format!("{}:{}", file.display(), oid))
            .collect::<Vec<_>>();

        format!("[{}]", pairs.join(", "))
    }
}
