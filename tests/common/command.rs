use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const DEFAULT_AUTHOR_DATE: &str = "2023-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with a single commit holding `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_revwalk_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    revwalk_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

/// Three commits on master, one hour apart, each adding a file
#[fixture]
pub fn linear_history_dir(repository_dir: TempDir) -> TempDir {
    run_revwalk_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    for (n, message) in ["First commit", "Second commit", "Third commit"]
        .into_iter()
        .enumerate()
    {
        commit_file(
            repository_dir.path(),
            &format!("file{}.txt", n + 1),
            message,
            message,
            &format!("2023-01-01 {:02}:00:00 +0000", 10 + n),
        );
    }

    repository_dir
}

/// master: M1 (10:00) <- M2 (11:00) <- M3 (12:00)
/// topic, branched from M2: T1 (13:00) <- T2 (14:00) <- T3 (15:00) <- T4 (16:00)
///
/// HEAD is left on master.
#[fixture]
pub fn branched_history_dir(repository_dir: TempDir) -> TempDir {
    let dir = repository_dir.path();
    run_revwalk_command(dir, &["init"]).assert().success();

    for n in 1..=3 {
        commit_file(
            dir,
            &format!("master{n}.txt"),
            &format!("master {n}"),
            &format!("M{n}"),
            &format!("2023-01-01 {:02}:00:00 +0000", 9 + n),
        );
    }

    run_revwalk_command(dir, &["branch", "create", "topic", "master^"])
        .assert()
        .success();
    switch_head(dir, "topic");
    std::fs::remove_file(dir.join("master3.txt")).expect("Failed to remove master3.txt");
    for n in 1..=4 {
        commit_file(
            dir,
            &format!("topic{n}.txt"),
            &format!("topic {n}"),
            &format!("T{n}"),
            &format!("2023-01-01 {:02}:00:00 +0000", 12 + n),
        );
    }
    switch_head(dir, "master");

    repository_dir
}

pub fn run_revwalk_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("revwalk").expect("Failed to find revwalk binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn revwalk_commit(dir: &Path, message: &str) -> Command {
    revwalk_commit_with_timestamp(dir, message, DEFAULT_AUTHOR_DATE)
}

pub fn revwalk_commit_with_timestamp(dir: &Path, message: &str, date: &str) -> Command {
    let mut cmd = run_revwalk_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_AUTHOR_DATE", date), // %Y-%m-%d %H:%M:%S %z
    ]);
    cmd
}

/// Write `content` to `file_name` and commit the whole workspace at `date`
pub fn commit_file(dir: &Path, file_name: &str, content: &str, message: &str, date: &str) {
    write_file(FileSpec::new(dir.join(file_name), content.to_string()));
    revwalk_commit_with_timestamp(dir, message, date)
        .assert()
        .success();
}

/// Point HEAD at another branch without touching the workspace
pub fn switch_head(dir: &Path, branch: &str) {
    std::fs::write(
        dir.join(".git").join("HEAD"),
        format!("ref: refs/heads/{branch}\n"),
    )
    .unwrap_or_else(|e| panic!("Failed to switch HEAD to {branch}: {e}"));
}

pub fn get_head_commit_sha(dir: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_revwalk_command(dir, &["rev-list", "HEAD"]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    stdout
        .lines()
        .next()
        .map(str::to_string)
        .ok_or_else(|| "HEAD has no commits".into())
}

/// Subjects printed by `log --oneline` for the given arguments, newest first
pub fn log_subjects(dir: &Path, args: &[&str]) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut command_args = vec!["log", "--oneline"];
    command_args.extend_from_slice(args);

    let output = run_revwalk_command(dir, &command_args).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    Ok(stdout
        .lines()
        .filter_map(|line| line.split_once(' '))
        .map(|(_, subject)| subject.to_string())
        .collect())
}
