//! Core repository components
//!
//! - `database`: blob store for committed file contents
//! - `graph`: commit arena, branch pointers and HEAD
//! - `index`: staging area and removal list
//! - `repository`: loaded state plus the areas every operation works on
//! - `state`: persisted graph and staging area
//! - `workspace`: working directory file system operations

pub mod database;
pub mod graph;
pub mod index;
pub mod repository;
pub mod state;
pub mod workspace;
