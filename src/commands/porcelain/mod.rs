//! Porcelain commands
//!
//! Every user-facing operation is an `impl Repository` block here. Each one
//! validates before it mutates; the caller saves the state only on success.
//!
//! ## Commands
//!
//! - `init`: create the repository with its root commit
//! - `add`, `rm`: stage a file or mark it for removal
//! - `commit`: record the staging area on top of HEAD
//! - `status`: branches, staged and removed files, unstaged changes
//! - `log`: history of HEAD, every commit, or commits by message
//! - `branch`: create, list or delete branch pointers
//! - `checkout`: restore a file or switch branches
//! - `reset`: move the current branch to another commit
//! - `merge`: three-way merge of another branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
