use crate::areas::graph::CommitGraph;
use crate::areas::index::Index;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileChange;
use colored::Colorize;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::PathBuf;

/// Content hash of every file in the working directory
pub type WorkingFiles = BTreeMap<PathBuf, ObjectId>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) branches: Vec<BranchName>,
    pub(crate) current_branch: Option<BranchName>,
    pub(crate) staged: BTreeSet<PathBuf>,
    pub(crate) removed: BTreeSet<PathBuf>,
    pub(crate) unstaged_changes: BTreeMap<PathBuf, FileChange>,
    pub(crate) untracked: BTreeSet<PathBuf>,
}

impl StatusInfo {
    pub fn new(graph: &CommitGraph, index: &Index, head: &Commit, working: &WorkingFiles) -> Self {
        StatusInfo {
            branches: graph.branches().keys().cloned().collect(),
            current_branch: graph.current_branch().cloned(),
            staged: index.staged().map(|(file, _)| file.clone()).collect(),
            removed: index.removed().cloned().collect(),
            unstaged_changes: Self::collect_unstaged_changes(index, head, working),
            untracked: Self::collect_untracked(index, head, working),
        }
    }

    fn collect_unstaged_changes(
        index: &Index,
        head: &Commit,
        working: &WorkingFiles,
    ) -> BTreeMap<PathBuf, FileChange> {
        let mut changes = BTreeMap::new();

        for (file, staged) in index.staged() {
            match working.get(file) {
                Some(oid) if oid != staged.oid() => {
                    changes.insert(file.clone(), FileChange::Modified);
                }
                Some(_) => {}
                None => {
                    changes.insert(file.clone(), FileChange::Deleted);
                }
            }
        }

        for (file, head_oid) in head.tracked_files() {
            if index.is_staged(file) || index.is_removed(file) {
                continue;
            }

            match working.get(file) {
                Some(oid) if oid != head_oid => {
                    changes.insert(file.clone(), FileChange::Modified);
                }
                Some(_) => {}
                None => {
                    changes.insert(file.clone(), FileChange::Deleted);
                }
            }
        }

        changes
    }

    fn collect_untracked(index: &Index, head: &Commit, working: &WorkingFiles) -> BTreeSet<PathBuf> {
        working
            .keys()
            .filter(|file| !index.is_staged(file) && !head.tracks(file))
            .cloned()
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty()
            && self.removed.is_empty()
            && self.unstaged_changes.is_empty()
            && self.untracked.is_empty()
    }

    pub fn unstaged_changes(&self) -> &BTreeMap<PathBuf, FileChange> {
        &self.unstaged_changes
    }

    pub fn untracked(&self) -> &BTreeSet<PathBuf> {
        &self.untracked
    }

    pub fn print(&self, writer: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(writer, "=== Branches ===")?;
        for branch in &self.branches {
            if self.current_branch.as_ref() == Some(branch) {
                writeln!(writer, "*{}", branch.as_ref().green())?;
            } else {
                writeln!(writer, "{}", branch)?;
            }
        }
        writeln!(writer)?;

        writeln!(writer, "=== Staged Files ===")?;
        for file in &self.staged {
            writeln!(writer, "{}", file.display().to_string().green())?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Removed Files ===")?;
        for file in &self.removed {
            writeln!(writer, "{}", file.display().to_string().red())?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
        for (file, change) in &self.unstaged_changes {
            writeln!(writer, "{}{}", file.display(), change)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Untracked Files ===")?;
        for file in &self.untracked {
            writeln!(writer, "{}", file.display().to_string().red())?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
