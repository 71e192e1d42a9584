use crate::common::command::{commit_file, log_subjects, run_revwalk_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::{fixture, rstest};

/// On top of the initial commit, one commit per tracked file, oldest first:
/// `1.txt`, then `a/2.txt`, then `a/b/3.txt`
#[fixture]
fn path_history_dir(
    #[from(crate::common::command::init_repository_dir)] repository_dir: TempDir,
) -> TempDir {
    let dir = repository_dir.path();
    commit_file(dir, "1.txt", "one!", "Change 1.txt", "2023-01-01 13:00:00 +0000");
    commit_file(dir, "a/2.txt", "two!", "Change a/2.txt", "2023-01-01 14:00:00 +0000");
    commit_file(
        dir,
        "a/b/3.txt",
        "three!",
        "Change a/b/3.txt",
        "2023-01-01 15:00:00 +0000",
    );

    repository_dir
}

#[rstest]
#[case::single_file(&["1.txt"], &["Change 1.txt", "Initial commit"])]
#[case::directory(&["a"], &["Change a/b/3.txt", "Change a/2.txt", "Initial commit"])]
#[case::nested_directory(&["a/b"], &["Change a/b/3.txt", "Initial commit"])]
#[case::nested_file(&["a/b/3.txt"], &["Change a/b/3.txt", "Initial commit"])]
#[case::several_paths(&["1.txt", "a/2.txt"], &["Change a/2.txt", "Change 1.txt", "Initial commit"])]
#[case::path_before_revision(&["a/2.txt", "HEAD"], &["Change a/2.txt", "Initial commit"])]
fn log_filter_commits_by_path(
    #[from(path_history_dir)] repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let subjects = log_subjects(repository_dir.path(), args)?;

    assert_eq!(subjects, expected);

    Ok(())
}

#[rstest]
#[case::range_touching_path(&["HEAD~2..", "a"], &["Change a/b/3.txt", "Change a/2.txt"])]
#[case::range_missing_path(&["HEAD~1..", "1.txt"], &[])]
#[case::exclusion_and_path(&["^HEAD~1", "HEAD", "a/b"], &["Change a/b/3.txt"])]
fn log_filter_by_path_with_revision_range(
    #[from(path_history_dir)] repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] expected: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let subjects = log_subjects(repository_dir.path(), args)?;

    assert_eq!(subjects, expected);

    Ok(())
}

#[rstest]
fn log_filter_by_path_not_in_workspace(
    #[from(path_history_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_revwalk_command(repository_dir.path(), &["log", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad revision 'missing.txt'"));

    Ok(())
}
