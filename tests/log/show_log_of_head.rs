use crate::common::command::{
    FIXED_DATE, commit_file, global_log_commit_ids, init_repository_dir, log_commit_ids,
    run_sprig_command,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_walks_from_head_back_to_the_root(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "c.txt", "three\n", "Add c");

    let ids = log_commit_ids(dir.path());
    assert_eq!(ids.len(), 3);

    let expected = [
        (ids[0].as_str(), "Add c"),
        (ids[1].as_str(), "Initial files"),
        (ids[2].as_str(), "initial commit"),
    ]
    .iter()
    .map(|(id, message)| format!("===\nCommit {id}\n{FIXED_DATE}\n{message}\n\n"))
    .collect::<String>();

    run_sprig_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(expected);
}

#[rstest]
fn log_only_follows_the_current_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    run_sprig_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir.path(), "c.txt", "three\n", "On master");

    run_sprig_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir.path(), "d.txt", "four\n", "On feature");

    let log = log_commit_ids(dir.path());
    assert_eq!(log.len(), 3);
    assert_eq!(global_log_commit_ids(dir.path()).len(), 4);
}

#[rstest]
fn log_ids_are_forty_hex_characters(init_repository_dir: TempDir) {
    for id in log_commit_ids(init_repository_dir.path()) {
        assert_eq!(id.len(), 40);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
