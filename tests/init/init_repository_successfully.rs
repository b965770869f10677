use crate::common::command::{FIXED_DATE, global_log_commit_ids, repository_dir, run_sprig_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_creates_a_single_root_commit_on_master(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;

    run_sprig_command(dir.path(), &["init"])
        .assert()
        .success()
        .stdout("");

    assert!(dir.path().join(".sprig").join("state").is_file());
    assert!(dir.path().join(".sprig").join("blobs").is_dir());

    let ids = global_log_commit_ids(dir.path());
    assert_eq!(ids.len(), 1);

    let expected_log = format!("===\nCommit {}\n{}\ninitial commit\n\n", ids[0], FIXED_DATE);
    run_sprig_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(expected_log);

    run_sprig_command(dir.path(), &["branch"])
        .assert()
        .success()
        .stdout("*master\n");

    Ok(())
}
