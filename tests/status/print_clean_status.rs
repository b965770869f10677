use crate::common::command::{init_repository_dir, run_sprig_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn clean_repository_prints_only_the_section_headers(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    run_sprig_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

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
