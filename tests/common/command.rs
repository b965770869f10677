use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Timestamp every test commit is stamped with
pub const FIXED_DATE: &str = "2023-01-01 12:00:00";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository on `master` whose second commit tracks `a.txt` and `b.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_sprig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "one\n".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("b.txt"),
        "two\n".to_string(),
    ));

    sprig_add(repository_dir.path(), "a.txt").assert().success();
    sprig_add(repository_dir.path(), "b.txt").assert().success();
    sprig_commit(repository_dir.path(), "Initial files")
        .assert()
        .success();

    repository_dir
}

pub fn run_sprig_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("sprig").expect("Failed to find sprig binary");
    cmd.envs(vec![
        ("NO_PAGER", "1"),
        ("NO_COLOR", "1"),
        ("SPRIG_DATE", FIXED_DATE),
    ]);
    cmd.env_remove("SPRIG_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn sprig_add(dir: &Path, file: &str) -> Command {
    run_sprig_command(dir, &["add", file])
}

pub fn sprig_commit(dir: &Path, message: &str) -> Command {
    run_sprig_command(dir, &["commit", "-m", message])
}

pub fn sprig_checkout_branch(dir: &Path, branch: &str) -> Command {
    run_sprig_command(dir, &["checkout", branch])
}

pub fn sprig_merge(dir: &Path, branch: &str) -> Command {
    run_sprig_command(dir, &["merge", branch])
}

/// Write `content` to `file`, stage it and commit it
pub fn commit_file(dir: &Path, file: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(file), content.to_string()));
    sprig_add(dir, file).assert().success();
    sprig_commit(dir, message).assert().success();
}

fn stdout_of(dir: &Path, args: &[&str]) -> String {
    let output = run_sprig_command(dir, args)
        .output()
        .expect("Failed to run sprig");
    assert!(output.status.success(), "sprig {:?} failed", args);

    String::from_utf8(output.stdout).expect("sprig printed invalid utf-8")
}

fn commit_ids_in(log: &str) -> Vec<String> {
    log.lines()
        .filter_map(|line| line.strip_prefix("Commit "))
        .map(str::to_string)
        .collect()
}

/// Ids on the HEAD chain, newest first
pub fn log_commit_ids(dir: &Path) -> Vec<String> {
    commit_ids_in(&stdout_of(dir, &["log"]))
}

/// Ids of every commit in the repository
pub fn global_log_commit_ids(dir: &Path) -> Vec<String> {
    commit_ids_in(&stdout_of(dir, &["global-log"]))
}

pub fn head_commit_id(dir: &Path) -> String {
    log_commit_ids(dir)
        .into_iter()
        .next()
        .expect("log printed no commits")
}

pub fn status_output(dir: &Path) -> String {
    stdout_of(dir, &["status"])
}
