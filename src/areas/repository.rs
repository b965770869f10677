use crate::areas::database::Database;
use crate::areas::graph::CommitGraph;
use crate::areas::index::Index;
use crate::areas::state::{State, StateFile};
use crate::areas::workspace::{SPRIG_DIR, Workspace};
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::status_info::{StatusInfo, WorkingFiles};
use crate::config::Settings;
use crate::error::SprigError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

pub const BLOBS_DIR: &str = "blobs";
pub const STATE_FILE: &str = "state";

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    settings: Settings,
    database: Database,
    workspace: Workspace,
    state_file: StateFile,
    state: State,
}

impl Repository {
    pub(crate) fn new(
        path: PathBuf,
        writer: Box<dyn std::io::Write>,
        settings: Settings,
        state: State,
    ) -> Self {
        let sprig_dir = path.join(SPRIG_DIR);

        Repository {
            database: Database::new(sprig_dir.join(BLOBS_DIR).into_boxed_path()),
            workspace: Workspace::new(path.into_boxed_path()),
            state_file: StateFile::new(sprig_dir.join(STATE_FILE).into_boxed_path()),
            writer: RefCell::new(writer),
            settings,
            state,
        }
    }

    /// Open the repository rooted at `path` and load its state
    pub fn open(
        path: &Path,
        writer: Box<dyn std::io::Write>,
        settings: Settings,
    ) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;

        let state_file = StateFile::new(
            path.join(SPRIG_DIR)
                .join(STATE_FILE)
                .into_boxed_path(),
        );
        if !state_file.exists() {
            return Err(SprigError::NotInitialized.into());
        }

        let state = state_file.load()?;
        tracing::debug!(path = %path.display(), commits = state.graph.len(), "opened repository");

        Ok(Repository::new(path, writer, settings, state))
    }

    /// Persist the graph and the staging area
    pub fn save(&self) -> anyhow::Result<()> {
        self.state_file.save(&self.state)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    pub fn graph(&self) -> &CommitGraph {
        &self.state.graph
    }

    pub fn index(&self) -> &Index {
        &self.state.index
    }

    pub fn head(&self) -> anyhow::Result<&Commit> {
        self.state.graph.head()
    }

    /// True if some untracked working file would be overwritten by `target`
    pub fn is_checkout_unsafe(&self, target: &Commit) -> anyhow::Result<bool> {
        let files = self.workspace.list_files()?;

        Ok(Migration::would_clobber_untracked(
            &files,
            self.index(),
            self.head()?,
            target,
        ))
    }

    /// Hash every file in the working directory
    pub fn working_files(&self) -> anyhow::Result<WorkingFiles> {
        self.workspace
            .list_files()?
            .into_iter()
            .map(|file| {
                let oid = self.workspace.read_blob(&file)?.object_id();
                Ok((file, oid))
            })
            .collect()
    }

    pub fn status_info(&self) -> anyhow::Result<StatusInfo> {
        let working = self.working_files()?;

        Ok(StatusInfo::new(
            self.graph(),
            self.index(),
            self.head()?,
            &working,
        ))
    }
}
