use crate::areas::repository::Repository;
use crate::areas::state::State;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::error::SprigError;

impl Repository {
    /// Restore `file` as recorded by `revision`, or by HEAD when none is given
    ///
    /// The restored file is not staged.
    pub fn checkout_file(&self, revision: Option<&str>, file: &str) -> anyhow::Result<()> {
        let commit = match revision {
            Some(revision) => self.graph().resolve(revision)?,
            None => self.head()?,
        };
        let file = self.workspace().normalize(file)?;

        let location = commit
            .blob_location(&file)
            .ok_or(SprigError::FileNotInCommit)?;
        let blob = self.database().retrieve(location)?;

        self.workspace().write_file(&file, blob.data())?;
        tracing::debug!(file = %file.display(), commit = %commit.id(), "restored file");

        Ok(())
    }

    /// Replace the working directory with the tip of `name` and switch to it
    pub fn checkout_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch =
            BranchName::try_parse(name.to_string()).map_err(|_| SprigError::NoSuchBranch)?;
        let target = self
            .graph()
            .branch(&branch)
            .ok_or(SprigError::NoSuchBranch)?
            .clone();

        let files = self.workspace().list_files()?;
        let migration = Migration::for_branch(&files, self.index(), self.head()?, &target);
        migration.ensure_safe()?;

        if self.graph().is_current_branch(&branch) {
            return Err(SprigError::AlreadyOnBranch.into());
        }

        self.workspace()
            .apply_migration(&migration, self.database())?;

        let State { graph, index } = self.state_mut();
        graph.switch_branch(&branch)?;
        index.clear();

        tracing::info!(%branch, head = %target.id(), "switched branch");

        Ok(())
    }
}
