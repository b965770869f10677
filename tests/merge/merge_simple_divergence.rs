use crate::common::command::{
    commit_file, global_log_commit_ids, init_repository_dir, log_commit_ids, run_sprig_command,
    sprig_checkout_branch, sprig_merge,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Test merging with simple divergent branches
///
/// History:
///       A (Initial files)
///      / \
///     B   C
///     |   |
///   master  feature
///
/// B adds c.txt, C edits b.txt and deletes a.txt. The merge takes C's edit
/// and deletion, keeps B's new file and records a merge commit.
#[rstest]
fn merge_takes_changes_made_only_on_the_given_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    run_sprig_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir.path(), "c.txt", "three\n", "Commit B - master changes");

    sprig_checkout_branch(dir.path(), "feature")
        .assert()
        .success();
    run_sprig_command(dir.path(), &["rm", "a.txt"])
        .assert()
        .success();
    commit_file(dir.path(), "b.txt", "two, from feature\n", "Commit C - feature changes");

    sprig_checkout_branch(dir.path(), "master")
        .assert()
        .success();
    let master_head = log_commit_ids(dir.path())[0].clone();
    let commits_before = global_log_commit_ids(dir.path()).len();

    sprig_merge(dir.path(), "feature")
        .assert()
        .success()
        .stdout("");

    assert!(!dir.path().join("a.txt").exists());
    assert_eq!(read_file(&dir.path().join("b.txt")), "two, from feature\n");
    assert_eq!(read_file(&dir.path().join("c.txt")), "three\n");

    let log = log_commit_ids(dir.path());
    assert_eq!(log[1], master_head);
    assert_eq!(global_log_commit_ids(dir.path()).len(), commits_before + 1);
    run_sprig_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Merged feature with master.\n"));

    run_sprig_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(
            "=== Branches ===\nfeature\n*master\n\n\
             === Staged Files ===\n\n\
             === Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n\n\
             === Untracked Files ===\n\n",
        );
}

/// Both branches make the same edit to b.txt, so the merge has nothing to record
#[rstest]
fn merge_with_nothing_to_take_makes_no_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    run_sprig_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir.path(), "b.txt", "same edit\n", "Edit b on master");

    sprig_checkout_branch(dir.path(), "feature")
        .assert()
        .success();
    commit_file(dir.path(), "b.txt", "same edit\n", "Edit b on feature");

    sprig_checkout_branch(dir.path(), "master")
        .assert()
        .success();
    let master_head = log_commit_ids(dir.path())[0].clone();
    let commits_before = global_log_commit_ids(dir.path()).len();

    sprig_merge(dir.path(), "feature")
        .assert()
        .failure()
        .code(1)
        .stderr("No changes added to the commit.\n");

    assert_eq!(read_file(&dir.path().join("b.txt")), "same edit\n");
    assert_eq!(log_commit_ids(dir.path())[0], master_head);
    assert_eq!(global_log_commit_ids(dir.path()).len(), commits_before);
}
