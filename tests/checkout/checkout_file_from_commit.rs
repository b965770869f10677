use crate::common::command::{commit_file, init_repository_dir, log_commit_ids, run_sprig_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn file_is_restored_from_an_abbreviated_commit_id(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "a.txt", "one, revised\n", "Revise a");
    let ids = log_commit_ids(dir.path());
    let initial_files = &ids[1];

    run_sprig_command(dir.path(), &["checkout", &initial_files[..8], "--", "a.txt"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.path().join("a.txt")), "one\n");

    run_sprig_command(dir.path(), &["checkout", initial_files, "--", "a.txt"])
        .assert()
        .success();
    assert_eq!(read_file(&dir.path().join("a.txt")), "one\n");
}

#[rstest]
fn restored_file_is_not_staged(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "a.txt", "one, revised\n", "Revise a");
    let initial_files = log_commit_ids(dir.path())[1].clone();

    run_sprig_command(dir.path(), &["checkout", &initial_files, "--", "a.txt"])
        .assert()
        .success();

    run_sprig_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\na.txt (modified)\n",
        ));
}

#[rstest]
fn unknown_commit_id_fails(init_repository_dir: TempDir) {
    run_sprig_command(
        init_repository_dir.path(),
        &["checkout", "0000000", "--", "a.txt"],
    )
    .assert()
    .failure()
    .code(1)
    .stderr("No commit with that id exists.\n");
}

#[rstest]
fn file_missing_from_the_commit_fails(init_repository_dir: TempDir) {
    run_sprig_command(init_repository_dir.path(), &["checkout", "--", "missing.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr("File does not exist in that commit.\n");
}

#[rstest]
fn missing_blob_is_reported_as_corruption(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    std::fs::remove_dir_all(dir.path().join(".sprig").join("blobs")).unwrap();

    run_sprig_command(dir.path(), &["checkout", "--", "a.txt"])
        .assert()
        .failure()
        .code(128)
        .stderr(predicates::str::starts_with("fatal: missing blob at "));
}
