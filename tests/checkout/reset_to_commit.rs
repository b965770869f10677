use crate::common::command::{
    commit_file, global_log_commit_ids, head_commit_id, init_repository_dir, log_commit_ids,
    run_sprig_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_moves_the_branch_and_restores_the_snapshot(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let initial_files = head_commit_id(dir.path());
    commit_file(dir.path(), "a.txt", "revised\n", "Revise a");
    commit_file(dir.path(), "c.txt", "three\n", "Add c");
    write_file(FileSpec::new(dir.path().join("notes.txt"), "keep\n".to_string()));

    run_sprig_command(dir.path(), &["reset", &initial_files[..10]])
        .assert()
        .success();

    assert_eq!(head_commit_id(dir.path()), initial_files);
    assert_eq!(read_file(&dir.path().join("a.txt")), "one\n");
    assert!(!dir.path().join("c.txt").exists());
    assert_eq!(read_file(&dir.path().join("notes.txt")), "keep\n");
    assert_eq!(log_commit_ids(dir.path()).len(), 2);
    assert_eq!(global_log_commit_ids(dir.path()).len(), 4);
}

#[rstest]
fn reset_refuses_to_clobber_untracked_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "c.txt", "three\n", "Add c");
    let with_c = head_commit_id(dir.path());
    run_sprig_command(dir.path(), &["rm", "c.txt"])
        .assert()
        .success();
    run_sprig_command(dir.path(), &["commit", "-m", "Drop c"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("c.txt"), "mine\n".to_string()));

    run_sprig_command(dir.path(), &["reset", &with_c])
        .assert()
        .failure()
        .code(1)
        .stderr("There is an untracked file in the way; delete it or add it first.\n");

    assert_eq!(read_file(&dir.path().join("c.txt")), "mine\n");
}

#[rstest]
fn reset_to_an_unknown_commit_fails(init_repository_dir: TempDir) {
    run_sprig_command(init_repository_dir.path(), &["reset", "abcdef0"])
        .assert()
        .failure()
        .code(1)
        .stderr("No commit with that id exists.\n");
}
