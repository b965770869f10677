use crate::common::command::{commit_file, init_repository_dir, log_commit_ids, run_sprig_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn find_prints_every_commit_with_the_message(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    commit_file(dir.path(), "c.txt", "three\n", "Same message");
    commit_file(dir.path(), "d.txt", "four\n", "Same message");

    let ids = log_commit_ids(dir.path());
    let mut expected = vec![ids[0].clone(), ids[1].clone()];
    expected.sort();

    run_sprig_command(dir.path(), &["find", "Same message"])
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", expected[0], expected[1]));
}

#[rstest]
fn find_with_no_match_fails(init_repository_dir: TempDir) {
    run_sprig_command(init_repository_dir.path(), &["find", "Nope"])
        .assert()
        .failure()
        .code(1)
        .stderr("Found no commit with that message.\n");
}
