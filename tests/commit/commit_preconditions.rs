use crate::common::command::{
    global_log_commit_ids, init_repository_dir, run_sprig_command, sprig_add, sprig_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn commit_with_nothing_staged_fails_without_a_new_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let before = global_log_commit_ids(dir.path());

    sprig_commit(dir.path(), "Empty")
        .assert()
        .failure()
        .code(1)
        .stderr("No changes added to the commit.\n");

    assert_eq!(global_log_commit_ids(dir.path()), before);
}

#[rstest]
#[case::empty_flag(&["commit", "-m", ""])]
#[case::missing_flag(&["commit"])]
fn commit_without_a_message_fails(init_repository_dir: TempDir, #[case] args: &[&str]) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("a.txt"), "edited\n".to_string()));
    sprig_add(dir.path(), "a.txt").assert().success();

    run_sprig_command(dir.path(), args)
        .assert()
        .failure()
        .code(1)
        .stderr("Please enter a commit message.\n");
}

#[rstest]
fn adding_a_missing_file_fails(init_repository_dir: TempDir) {
    sprig_add(init_repository_dir.path(), "missing.txt")
        .assert()
        .failure()
        .code(1)
        .stderr("File does not exist.\n");
}
