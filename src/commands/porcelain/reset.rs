use crate::areas::repository::Repository;
use crate::areas::state::State;
use crate::artifacts::checkout::migration::Migration;

impl Repository {
    /// Check out every file of `revision` and move the current branch there
    pub fn reset(&mut self, revision: &str) -> anyhow::Result<()> {
        let target = self.graph().resolve(revision)?.clone();

        let files = self.workspace().list_files()?;
        let migration = Migration::for_reset(&files, self.index(), self.head()?, &target);
        migration.ensure_safe()?;

        self.workspace()
            .apply_migration(&migration, self.database())?;

        let State { graph, index } = self.state_mut();
        graph.reset_current(target.id().clone());
        index.clear();

        tracing::info!(head = %target.id(), "reset current branch");

        Ok(())
    }
}
