#[path = "../common/mod.rs"]
mod common;

mod find_commits_by_message;
mod show_log_of_head;
