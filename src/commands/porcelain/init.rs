use crate::areas::graph::CommitGraph;
use crate::areas::repository::{BLOBS_DIR, Repository};
use crate::areas::state::State;
use crate::areas::workspace::SPRIG_DIR;
use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::{BlobLocations, CommitBuilder, ROOT_COMMIT_MESSAGE};
use crate::config::Settings;
use crate::error::SprigError;
use anyhow::Context;
use std::fs;
use std::path::Path;

impl Repository {
    /// Create `.sprig/` under `path` with the root commit on `master`
    pub fn init(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        settings: Settings,
    ) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;
        let sprig_dir = path.join(SPRIG_DIR);

        if sprig_dir.exists() {
            return Err(SprigError::AlreadyInitialized.into());
        }

        fs::create_dir_all(sprig_dir.join(BLOBS_DIR))
            .context("Failed to create .sprig/blobs directory")?;

        let root = CommitBuilder::root(settings.timestamp(), ROOT_COMMIT_MESSAGE.to_string())
            .build(BlobLocations::new());
        let branch = BranchName::try_parse(DEFAULT_BRANCH.to_string())?;
        tracing::info!(root = %root.id(), %branch, "initialized repository");

        let repository = Repository::new(
            path,
            writer,
            settings,
            State::new(CommitGraph::new(root, branch)),
        );
        repository
            .save()
            .context("Failed to write the initial state")?;

        Ok(repository)
    }
}
