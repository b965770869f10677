//! Checkout migration and safety check
//!
//! A migration is the complete file-system plan for moving the working
//! directory from HEAD to a target commit:
//!
//! - **Branch checkout**: delete every working file, then restore every file
//!   the target tracks
//! - **Reset**: delete the files HEAD tracks but the target does not, then
//!   restore every file the target tracks
//!
//! ## Safety
//!
//! A working file that is neither staged nor tracked by HEAD but is tracked
//! by the target would be silently overwritten. Planning records such files
//! and [`Migration::ensure_safe`] refuses the whole migration if any exist.

use crate::areas::index::Index;
use crate::artifacts::database::blob_location::BlobLocation;
use crate::artifacts::objects::commit::Commit;
use crate::error::SprigError;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Migration {
    /// Files to delete from the working directory
    deletions: BTreeSet<PathBuf>,
    /// Files to restore, with the blob holding their content
    writes: BTreeMap<PathBuf, BlobLocation>,
    /// Untracked files the migration would clobber
    untracked_in_the_way: BTreeSet<PathBuf>,
}

impl Migration {
    /// Plan a branch checkout from `head` to `target`
    pub fn for_branch(
        workspace_files: &BTreeSet<PathBuf>,
        index: &Index,
        head: &Commit,
        target: &Commit,
    ) -> Self {
        Migration {
            deletions: workspace_files.clone(),
            writes: target.blob_locations().clone(),
            untracked_in_the_way: Self::untracked_in_the_way(workspace_files, index, head, target),
        }
    }

    /// Plan a reset from `head` to `target`
    pub fn for_reset(
        workspace_files: &BTreeSet<PathBuf>,
        index: &Index,
        head: &Commit,
        target: &Commit,
    ) -> Self {
        let deletions = head
            .tracked_files()
            .keys()
            .filter(|file| !target.tracks(file))
            .cloned()
            .collect();

        Migration {
            deletions,
            writes: target.blob_locations().clone(),
            untracked_in_the_way: Self::untracked_in_the_way(workspace_files, index, head, target),
        }
    }

    /// Safety check on its own, without planning any file operations
    pub fn would_clobber_untracked(
        workspace_files: &BTreeSet<PathBuf>,
        index: &Index,
        head: &Commit,
        target: &Commit,
    ) -> bool {
        !Self::untracked_in_the_way(workspace_files, index, head, target).is_empty()
    }

    fn untracked_in_the_way(
        workspace_files: &BTreeSet<PathBuf>,
        index: &Index,
        head: &Commit,
        target: &Commit,
    ) -> BTreeSet<PathBuf> {
        workspace_files
            .iter()
            .filter(|file| !index.is_staged(file) && !head.tracks(file) && target.tracks(file))
            .cloned()
            .collect()
    }

    pub fn is_unsafe(&self) -> bool {
        !self.untracked_in_the_way.is_empty()
    }

    pub fn ensure_safe(&self) -> anyhow::Result<()> {
        if self.is_unsafe() {
            tracing::debug!(files = ?self.untracked_in_the_way, "untracked files in the way");
            return Err(SprigError::UntrackedFileInTheWay.into());
        }

        Ok(())
    }

    pub fn deletions(&self) -> &BTreeSet<PathBuf> {
        &self.deletions
    }

    pub fn writes(&self) -> &BTreeMap<PathBuf, BlobLocation> {
        &self.writes
    }

    pub fn untracked(&self) -> &BTreeSet<PathBuf> {
        &self.untracked_in_the_way
    }
}
