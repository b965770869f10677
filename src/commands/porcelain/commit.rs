use crate::areas::repository::Repository;
use crate::areas::state::State;
use crate::artifacts::objects::commit::CommitBuilder;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::SprigError;

impl Repository {
    /// Record the staging area on top of HEAD
    pub fn commit(&mut self, message: &str) -> anyhow::Result<ObjectId> {
        if message.trim().is_empty() {
            return Err(SprigError::EmptyMessage.into());
        }
        if self.index().is_clean() {
            return Err(SprigError::NothingToCommit.into());
        }

        let head = self.head()?.clone();

        let mut tracked_files = head.tracked_files().clone();
        for (file, staged) in self.index().staged() {
            tracked_files.insert(file.clone(), staged.oid().clone());
        }
        for file in self.index().removed() {
            tracked_files.remove(file);
        }

        let builder = CommitBuilder::child(
            self.settings().timestamp(),
            message.to_string(),
            tracked_files,
            &head,
        );

        // unchanged files keep pointing at the blob stored by an earlier commit
        let mut blob_locations = head.blob_locations().clone();
        blob_locations.retain(|file, _| builder.tracked_files().contains_key(file));
        for (file, staged) in self.index().staged() {
            let location = self
                .database()
                .store(builder.id(), file, &staged.to_blob())?;
            blob_locations.insert(file.clone(), location);
        }

        let commit = builder.build(blob_locations);
        let commit_id = commit.id().clone();
        tracing::info!(
            commit = %commit_id,
            parent = %head.id(),
            files = commit.tracked_files().len(),
            "created commit"
        );

        let State { graph, index } = self.state_mut();
        index.clear();
        graph.add_commit(commit);

        Ok(commit_id)
    }
}
