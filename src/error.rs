//! Error types for the version-control core.
//!
//! User-facing failures carry the exact message printed to the user. Anything
//! not listed here travels as a plain `anyhow::Error`.

use thiserror::Error;

/// Failures reported to the user without touching the repository state
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SprigError {
    #[error("Incorrect operands.")]
    IncorrectOperands,

    #[error("Not in an initialized sprig directory.")]
    NotInitialized,

    #[error("A sprig version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("File does not exist.")]
    FileNotFound,

    #[error("Invalid file path: {0}")]
    InvalidPath(String),

    #[error("No reason to remove the file.")]
    NothingToRemove,

    #[error("Please enter a commit message.")]
    EmptyMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("No commit with that id exists.")]
    NoSuchCommit,

    #[error("Ambiguous commit id {prefix}; candidates are: {}", candidates.join(", "))]
    AmbiguousCommitId {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("No such branch exists.")]
    NoSuchBranch,

    #[error("A branch with that name does not exist.")]
    BranchNotFound,

    #[error("A branch with that name already exists.")]
    BranchExists,

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("There is an untracked file in the way; delete it or add it first.")]
    UntrackedFileInTheWay,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    MergeWithItself,

    #[error("Not on any branch.")]
    DetachedHead,

    #[error("missing blob at {location}; the repository is corrupt")]
    MissingBlob { location: String },
}

impl SprigError {
    /// Corruption is unrecoverable and surfaced apart from user mistakes
    pub fn is_corruption(&self) -> bool {
        matches!(self, SprigError::MissingBlob { .. })
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_corruption() { 128 } else { 1 }
    }
}
