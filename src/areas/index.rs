//! Staging area
//!
//! The index holds what the next commit will change relative to HEAD:
//!
//! - `staged`: files whose current content was added, with a private copy of
//!   the bytes so later edits to the working file do not leak into the commit
//! - `removed`: files tracked by HEAD that the next commit drops
//!
//! A file is never both staged and removed. Both sets are emptied by every
//! commit and by every operation that replaces the working directory.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Content pending for the next commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedFile {
    oid: ObjectId,
    data: Vec<u8>,
}

impl StagedFile {
    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn to_blob(&self) -> Blob {
        Blob::from(self.data.clone())
    }
}

impl From<&Blob> for StagedFile {
    fn from(blob: &Blob) -> Self {
        StagedFile {
            oid: blob.object_id(),
            data: blob.data().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Index {
    staged: BTreeMap<PathBuf, StagedFile>,
    removed: BTreeSet<PathBuf>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `blob` as the next version of `path`
    pub fn stage(&mut self, path: PathBuf, blob: &Blob) {
        self.removed.remove(&path);
        self.staged.insert(path, StagedFile::from(blob));
    }

    pub fn unstage(&mut self, path: &Path) -> bool {
        self.staged.remove(path).is_some()
    }

    /// Mark `path` for removal at the next commit, dropping any staged copy
    pub fn mark_removed(&mut self, path: PathBuf) {
        self.staged.remove(&path);
        self.removed.insert(path);
    }

    pub fn unmark_removed(&mut self, path: &Path) -> bool {
        self.removed.remove(path)
    }

    pub fn is_staged(&self, path: &Path) -> bool {
        self.staged.contains_key(path)
    }

    pub fn is_removed(&self, path: &Path) -> bool {
        self.removed.contains(path)
    }

    pub fn staged_entry(&self, path: &Path) -> Option<&StagedFile> {
        self.staged.get(path)
    }

    pub fn staged(&self) -> impl Iterator<Item = (&PathBuf, &StagedFile)> {
        self.staged.iter()
    }

    pub fn removed(&self) -> impl Iterator<Item = &PathBuf> {
        self.removed.iter()
    }

    /// Nothing staged and nothing marked for removal
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.removed.is_empty()
    }

    pub fn clear(&mut self) {
        self.staged.clear();
        self.removed.clear();
    }
}
