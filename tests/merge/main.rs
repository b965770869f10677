#[path = "../common/mod.rs"]
mod common;

mod merge_preconditions;
mod merge_simple_divergence;
