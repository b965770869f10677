use crate::areas::repository::Repository;
use crate::areas::state::State;
use crate::error::SprigError;

impl Repository {
    pub fn add(&mut self, file: &str) -> anyhow::Result<()> {
        let file = self.workspace().normalize(file)?;

        let blob = self
            .workspace()
            .try_read_blob(&file)?
            .ok_or(SprigError::FileNotFound)?;
        let oid = blob.object_id();

        let State { graph, index } = self.state_mut();
        index.unmark_removed(&file);

        // identical to HEAD: nothing to stage
        if graph.head()?.file_oid(&file) == Some(&oid) {
            index.unstage(&file);
            tracing::debug!(file = %file.display(), "content matches HEAD, not staged");
            return Ok(());
        }

        tracing::debug!(file = %file.display(), %oid, "staged file");
        index.stage(file, &blob);

        Ok(())
    }
}
