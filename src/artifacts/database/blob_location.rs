use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Location of a stored blob, relative to the blob store root
///
/// Blobs are namespaced by the commit that introduced them:
/// `<commit-id>/<filename>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlobLocation(PathBuf);

impl BlobLocation {
    pub fn new(commit_id: &ObjectId, file: &Path) -> Self {
        BlobLocation(PathBuf::from(commit_id.as_ref()).join(file))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for BlobLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
