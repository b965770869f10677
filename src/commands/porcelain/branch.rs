use crate::areas::repository::Repository;
use crate::areas::state::State;
use crate::artifacts::branch::branch_name::BranchName;
use crate::error::SprigError;
use std::io::Write;

impl Repository {
    /// Create a branch at HEAD, or list the branches when no name is given
    pub fn branch(&mut self, name: Option<&str>) -> anyhow::Result<()> {
        let Some(name) = name else {
            return self.list_branches();
        };

        let branch = BranchName::try_parse(name.to_string())?;

        let State { graph, .. } = self.state_mut();
        let head = graph.head_id().clone();
        if !graph.create_branch(branch.clone(), head.clone()) {
            return Err(SprigError::BranchExists.into());
        }

        tracing::info!(%branch, %head, "created branch");

        Ok(())
    }

    pub fn rm_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let branch =
            BranchName::try_parse(name.to_string()).map_err(|_| SprigError::BranchNotFound)?;

        let State { graph, .. } = self.state_mut();
        if graph.branch(&branch).is_none() {
            return Err(SprigError::BranchNotFound.into());
        }
        if graph.is_current_branch(&branch) {
            return Err(SprigError::RemoveCurrentBranch.into());
        }

        graph.delete_branch(&branch);
        tracing::info!(%branch, "deleted branch");

        Ok(())
    }

    fn list_branches(&self) -> anyhow::Result<()> {
        let graph = self.graph();

        for branch in graph.branches().keys() {
            let marker = if graph.is_current_branch(branch) { "*" } else { "" };
            writeln!(self.writer(), "{}{}", marker, branch)?;
        }

        Ok(())
    }
}
