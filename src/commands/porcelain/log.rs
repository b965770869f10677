use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::error::SprigError;
use std::io::Write;

impl Repository {
    /// Print HEAD and its ancestors back to the root commit
    pub fn log(&self) -> anyhow::Result<()> {
        let graph = self.graph();
        tracing::debug!(head = %graph.head_id(), "printing log");

        for commit in graph.ancestors(graph.head_id()) {
            self.display_commit(commit)?;
        }

        Ok(())
    }

    /// Print every commit ever made, in id order
    pub fn global_log(&self) -> anyhow::Result<()> {
        for commit in self.graph().commits() {
            self.display_commit(commit)?;
        }

        Ok(())
    }

    /// Print the id of every commit whose message is exactly `message`
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let commits = self.graph().find_by_message(message);
        tracing::debug!(message, matches = commits.len(), "searched commit messages");

        if commits.is_empty() {
            return Err(SprigError::NoCommitWithMessage.into());
        }

        for commit in commits {
            writeln!(self.writer(), "{}", commit.id())?;
        }

        Ok(())
    }

    fn display_commit(&self, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", commit.log_entry())?;

        Ok(())
    }
}
