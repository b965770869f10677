use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::merge::resolution::{FileResolution, MergePlan, conflict_content};
use crate::artifacts::merge::split_point::{SplitPoint, SplitPointFinder};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::error::SprigError;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};

const ANCESTOR_NOTICE: &str = "Given branch is an ancestor of the current branch.";
const FAST_FORWARD_NOTICE: &str = "Current branch fast-forwarded.";
const CONFLICT_NOTICE: &str = "Encountered a merge conflict.";

/// What happens to one file in the working directory and staging area
enum MergeAction {
    Stage(Blob),
    Remove,
    /// Written with conflict markers and left unstaged for the user to resolve
    Conflict(Blob),
}

impl Repository {
    /// Merge the tip of branch `name` into the current branch
    pub fn merge(&mut self, name: &str) -> anyhow::Result<()> {
        let branch =
            BranchName::try_parse(name.to_string()).map_err(|_| SprigError::BranchNotFound)?;
        let given = self
            .graph()
            .branch(&branch)
            .ok_or(SprigError::BranchNotFound)?
            .clone();

        if self.is_checkout_unsafe(&given)? {
            return Err(SprigError::UntrackedFileInTheWay.into());
        }
        if !self.index().is_clean() {
            return Err(SprigError::UncommittedChanges.into());
        }
        if self.graph().is_current_branch(&branch) {
            return Err(SprigError::MergeWithItself.into());
        }

        let current_branch = self
            .graph()
            .current_branch()
            .cloned()
            .ok_or(SprigError::DetachedHead)?;
        let head = self.head()?.clone();

        let split_point = {
            let graph = self.graph();
            SplitPointFinder::new(|commit_id| {
                graph
                    .find_by_id(commit_id)
                    .and_then(|commit| commit.parent().cloned())
            })
            .find(head.id(), given.id())
        };

        let base_id = match split_point {
            Some(SplitPoint::GivenIsAncestor) => {
                writeln!(self.writer(), "{}", ANCESTOR_NOTICE)?;
                return Ok(());
            }
            Some(SplitPoint::Base(base_id)) if &base_id == head.id() => {
                self.reset(given.id().as_ref())?;
                writeln!(self.writer(), "{}", FAST_FORWARD_NOTICE)?;
                return Ok(());
            }
            Some(SplitPoint::Base(base_id)) => base_id,
            None => anyhow::bail!(
                "{} and {} share no history",
                current_branch,
                branch
            ),
        };

        let base = self
            .graph()
            .find_by_id(&base_id)
            .cloned()
            .with_context(|| format!("split point {} is not in the graph", base_id))?;
        tracing::debug!(
            current = %head.id(),
            given = %given.id(),
            base = %base.id(),
            "merging"
        );

        let plan = MergePlan::new(&base, &head, &given);
        let actions = self.plan_actions(&plan, &head, &given)?;

        for (file, action) in actions {
            match action {
                MergeAction::Stage(blob) => {
                    self.workspace().write_file(&file, blob.data())?;
                    self.state_mut().index.stage(file, &blob);
                }
                MergeAction::Remove => {
                    self.workspace().remove_file(&file)?;
                    self.state_mut().index.mark_removed(file);
                }
                MergeAction::Conflict(blob) => {
                    self.workspace().write_file(&file, blob.data())?;
                }
            }
        }

        if plan.has_conflicts() {
            writeln!(self.writer(), "{}", CONFLICT_NOTICE)?;
            return Ok(());
        }

        let message = format!("Merged {} with {}.", branch, current_branch);
        self.commit(&message)?;

        Ok(())
    }

    // Every blob is read before the working directory is touched.
    fn plan_actions(
        &self,
        plan: &MergePlan,
        head: &Commit,
        given: &Commit,
    ) -> anyhow::Result<Vec<(PathBuf, MergeAction)>> {
        plan.changes()
            .filter_map(|(file, resolution)| {
                tracing::trace!(file = %file.display(), ?resolution, "resolved file");

                self.merge_action(resolution, file, head, given)
                    .map(|action| action.map(|action| (file.clone(), action)))
                    .transpose()
            })
            .collect()
    }

    fn merge_action(
        &self,
        resolution: FileResolution,
        file: &Path,
        head: &Commit,
        given: &Commit,
    ) -> anyhow::Result<Option<MergeAction>> {
        let action = match resolution {
            FileResolution::Keep => return Ok(None),
            FileResolution::TakeGiven => MergeAction::Stage(self.committed_blob(given, file)?),
            FileResolution::Remove => MergeAction::Remove,
            FileResolution::Conflict => {
                let current = self.try_committed_blob(head, file)?;
                let given = self.try_committed_blob(given, file)?;
                let content = conflict_content(
                    current.as_ref().map(|blob| &blob.data()[..]),
                    given.as_ref().map(|blob| &blob.data()[..]),
                );
                MergeAction::Conflict(Blob::from(content))
            }
        };

        Ok(Some(action))
    }

    fn committed_blob(&self, commit: &Commit, file: &Path) -> anyhow::Result<Blob> {
        self.try_committed_blob(commit, file)?
            .ok_or_else(|| {
                SprigError::MissingBlob {
                    location: format!("{}/{}", commit.id(), file.display()),
                }
                .into()
            })
    }

    fn try_committed_blob(&self, commit: &Commit, file: &Path) -> anyhow::Result<Option<Blob>> {
        commit
            .blob_location(file)
            .map(|location| self.database().retrieve(location))
            .transpose()
    }
}
