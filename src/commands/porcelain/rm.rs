use crate::areas::repository::Repository;
use crate::areas::state::State;
use crate::error::SprigError;

impl Repository {
    pub fn rm(&mut self, file: &str) -> anyhow::Result<()> {
        let file = self.workspace().normalize(file)?;

        let State { graph, index } = self.state_mut();
        let is_tracked = graph.head()?.tracks(&file);

        if !index.is_staged(&file) && !is_tracked {
            return Err(SprigError::NothingToRemove.into());
        }

        index.unstage(&file);
        if is_tracked {
            index.mark_removed(file.clone());
            self.workspace().remove_file(&file)?;
        }

        tracing::debug!(file = %file.display(), is_tracked, "removed file");

        Ok(())
    }
}
