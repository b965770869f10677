use crate::common::command::{
    commit_file, global_log_commit_ids, init_repository_dir, run_sprig_command, sprig_add,
    sprig_checkout_branch, sprig_merge,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merging_an_unknown_branch_fails(init_repository_dir: TempDir) {
    sprig_merge(init_repository_dir.path(), "nope")
        .assert()
        .failure()
        .code(1)
        .stderr("A branch with that name does not exist.\n");
}

#[rstest]
fn merging_the_current_branch_fails(init_repository_dir: TempDir) {
    sprig_merge(init_repository_dir.path(), "master")
        .assert()
        .failure()
        .code(1)
        .stderr("Cannot merge a branch with itself.\n");
}

#[rstest]
fn merging_with_staged_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    run_sprig_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("a.txt"), "pending\n".to_string()));
    sprig_add(dir.path(), "a.txt").assert().success();

    sprig_merge(dir.path(), "feature")
        .assert()
        .failure()
        .code(1)
        .stderr("You have uncommitted changes.\n");
}

#[rstest]
fn merging_over_an_untracked_file_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    run_sprig_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir.path(), "a.txt", "master\n", "Edit a on master");
    sprig_checkout_branch(dir.path(), "feature")
        .assert()
        .success();
    commit_file(dir.path(), "c.txt", "feature\n", "Add c on feature");
    sprig_checkout_branch(dir.path(), "master")
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("c.txt"), "mine\n".to_string()));
    let commits_before = global_log_commit_ids(dir.path()).len();

    sprig_merge(dir.path(), "feature")
        .assert()
        .failure()
        .code(1)
        .stderr("There is an untracked file in the way; delete it or add it first.\n");

    assert_eq!(read_file(&dir.path().join("c.txt")), "mine\n");
    assert_eq!(global_log_commit_ids(dir.path()).len(), commits_before);
}
