//! Commit graph
//!
//! The graph is the sole owner of every commit. Commits live in an arena keyed
//! by id and point at their parent by id, so history is a set of singly-linked
//! chains with no ownership cycles.
//!
//! Besides the arena the graph tracks:
//! - Branches: names pointing at commit ids
//! - HEAD: the commit currently checked out
//! - The current branch, whose pointer moves with HEAD
//!
//! ## Invariants
//!
//! - `head == branches[current_branch]` whenever a current branch is set
//! - every branch points at a commit in the arena

use crate::artifacts::branch::REF_ALIASES;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::SprigError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitGraph {
    commits: BTreeMap<ObjectId, Commit>,
    branches: BTreeMap<BranchName, ObjectId>,
    head: ObjectId,
    current_branch: Option<BranchName>,
}

impl CommitGraph {
    /// Create a graph holding only `root`, with `branch` pointing at it
    pub fn new(root: Commit, branch: BranchName) -> Self {
        let head = root.id().clone();

        CommitGraph {
            commits: BTreeMap::from([(head.clone(), root)]),
            branches: BTreeMap::from([(branch.clone(), head.clone())]),
            head,
            current_branch: Some(branch),
        }
    }

    /// Insert `commit`, make it HEAD and advance the current branch
    pub fn add_commit(&mut self, commit: Commit) {
        let id = commit.id().clone();
        self.commits.insert(id.clone(), commit);
        self.head = id.clone();

        if let Some(branch) = &self.current_branch {
            self.branches.insert(branch.clone(), id);
        }
    }

    pub fn head(&self) -> anyhow::Result<&Commit> {
        self.find_by_id(&self.head)
            .with_context(|| format!("HEAD points at unknown commit {}", self.head))
    }

    pub fn head_id(&self) -> &ObjectId {
        &self.head
    }

    pub fn current_branch(&self) -> Option<&BranchName> {
        self.current_branch.as_ref()
    }

    pub fn is_current_branch(&self, name: &BranchName) -> bool {
        self.current_branch.as_ref() == Some(name)
    }

    pub fn commits(&self) -> impl Iterator<Item = &Commit> {
        self.commits.values()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn find_by_id(&self, id: &ObjectId) -> Option<&Commit> {
        self.commits.get(id)
    }

    /// Look a commit up by an abbreviated id
    ///
    /// Ids are scanned in lexicographic order. More than one match is an
    /// [`SprigError::AmbiguousCommitId`] error.
    pub fn find_by_prefix(&self, prefix: &str) -> anyhow::Result<Option<&Commit>> {
        let mut matches = self
            .commits
            .values()
            .filter(|commit| commit.id().starts_with(prefix));

        let first = matches.next();
        let rest = matches.collect::<Vec<_>>();

        if let Some(first) = first
            && !rest.is_empty()
        {
            let candidates = std::iter::once(first)
                .chain(rest)
                .map(|commit| commit.id().to_short_oid())
                .collect();

            return Err(SprigError::AmbiguousCommitId {
                prefix: prefix.to_string(),
                candidates,
            }
            .into());
        }

        Ok(first)
    }

    /// Resolve a full id, an abbreviated id or a HEAD alias to a commit
    pub fn resolve(&self, revision: &str) -> anyhow::Result<&Commit> {
        let revision = REF_ALIASES.get(revision).copied().unwrap_or(revision);

        let commit = if revision == "HEAD" {
            Some(self.head()?)
        } else if revision.is_empty() || !revision.chars().all(|c| c.is_ascii_hexdigit()) {
            None
        } else if revision.len() >= OBJECT_ID_LENGTH {
            ObjectId::try_parse(revision.to_string())
                .ok()
                .and_then(|id| self.find_by_id(&id))
        } else {
            self.find_by_prefix(revision)?
        };

        commit.ok_or_else(|| SprigError::NoSuchCommit.into())
    }

    /// All commits whose message is exactly `message`, in enumeration order
    pub fn find_by_message(&self, message: &str) -> Vec<&Commit> {
        self.commits
            .values()
            .filter(|commit| commit.message() == message)
            .collect()
    }

    pub fn branches(&self) -> &BTreeMap<BranchName, ObjectId> {
        &self.branches
    }

    pub fn branch(&self, name: &BranchName) -> Option<&Commit> {
        self.branches.get(name).and_then(|id| self.find_by_id(id))
    }

    /// Point a new branch at `id`; false if the name is taken
    pub fn create_branch(&mut self, name: BranchName, id: ObjectId) -> bool {
        if self.branches.contains_key(&name) {
            return false;
        }

        self.branches.insert(name, id);
        true
    }

    /// Make `name` the current branch and move HEAD to its tip
    ///
    /// The caller checks that the branch exists and that the working
    /// directory may be overwritten.
    pub fn switch_branch(&mut self, name: &BranchName) -> anyhow::Result<()> {
        let tip = self
            .branches
            .get(name)
            .cloned()
            .ok_or(SprigError::NoSuchBranch)?;

        self.head = tip;
        self.current_branch = Some(name.clone());
        Ok(())
    }

    /// Move HEAD and the current branch pointer to `id`
    pub fn reset_current(&mut self, id: ObjectId) {
        if let Some(branch) = &self.current_branch {
            self.branches.insert(branch.clone(), id.clone());
        }

        self.head = id;
    }

    /// Remove the branch pointer only; commits stay in the arena
    pub fn delete_branch(&mut self, name: &BranchName) -> bool {
        self.branches.remove(name).is_some()
    }

    /// Walk the parent chain, starting with `id` itself
    pub fn ancestors<'g>(&'g self, id: &ObjectId) -> Ancestors<'g> {
        Ancestors {
            graph: self,
            next: self.find_by_id(id),
        }
    }
}

pub struct Ancestors<'g> {
    graph: &'g CommitGraph,
    next: Option<&'g Commit>,
}

impl<'g> Iterator for Ancestors<'g> {
    type Item = &'g Commit;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current
            .parent()
            .and_then(|parent| self.graph.find_by_id(parent));

        Some(current)
    }
}
