//! Persisted repository state
//!
//! The commit graph and the staging area are saved together as one bincode
//! document. Loading takes a shared lock on the file and saving an exclusive
//! one, so two processes never observe a half-written state.

use crate::areas::graph::CommitGraph;
use crate::areas::index::Index;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub graph: CommitGraph,
    pub index: Index,
}

impl State {
    pub fn new(graph: CommitGraph) -> Self {
        State {
            graph,
            index: Index::new(),
        }
    }
}

#[derive(Debug)]
pub struct StateFile {
    path: Box<Path>,
}

impl StateFile {
    pub fn new(path: Box<Path>) -> Self {
        StateFile { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn load(&self) -> anyhow::Result<State> {
        let mut state_file = std::fs::OpenOptions::new()
            .read(true)
            .open(self.path())
            .with_context(|| format!("Unable to open state file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut state_file, file_guard::Lock::Shared, 0, 1)?;

        let mut content = Vec::new();
        lock.deref_mut()
            .read_to_end(&mut content)
            .context("Unable to read state file")?;

        let state = bincode::deserialize::<State>(&content)
            .with_context(|| format!("State file {} is corrupt", self.path.display()))?;
        tracing::trace!(commits = state.graph.len(), "loaded state");

        Ok(state)
    }

    pub fn save(&self, state: &State) -> anyhow::Result<()> {
        let content = bincode::serialize(state).context("Unable to serialize state")?;

        let mut state_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())
            .with_context(|| format!("Unable to open state file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut state_file, file_guard::Lock::Exclusive, 0, 1)?;

        lock.deref_mut()
            .write_all(&content)
            .context("Unable to write state file")?;
        tracing::trace!(bytes = content.len(), "saved state");

        Ok(())
    }
}
