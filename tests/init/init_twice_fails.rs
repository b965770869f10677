use crate::common::command::{global_log_commit_ids, repository_dir, run_sprig_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn init_refuses_to_overwrite_an_existing_repository(repository_dir: TempDir) {
    let dir = repository_dir;
    run_sprig_command(dir.path(), &["init"]).assert().success();
    let before = global_log_commit_ids(dir.path());

    run_sprig_command(dir.path(), &["init"])
        .assert()
        .failure()
        .code(1)
        .stderr("A sprig version-control system already exists in the current directory.\n");

    assert_eq!(global_log_commit_ids(dir.path()), before);
}
