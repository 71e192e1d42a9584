use crate::common::command::{commit_file, run_revwalk_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_log_with_name_status(
    #[from(crate::common::command::init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    commit_file(dir, "a/2.txt", "two!", "Change a/2.txt", "2023-01-01 13:00:00 +0000");
    std::fs::remove_file(dir.join("1.txt"))?;
    commit_file(dir, "4.txt", "four", "Replace 1.txt", "2023-01-01 14:00:00 +0000");

    let output = run_revwalk_command(dir, &["log", "--oneline", "--name-status"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let lines = stdout
        .lines()
        .map(|line| line.split_once(' ').map_or(line, |(_, subject)| subject))
        .collect::<Vec<_>>();

    assert_eq!(
        lines,
        vec![
            "Replace 1.txt",
            "D\t1.txt",
            "A\t4.txt",
            "Change a/2.txt",
            "M\ta/2.txt",
            "Initial commit",
            "A\t1.txt",
            "A\ta/2.txt",
            "A\ta/b/3.txt",
        ]
    );

    Ok(())
}

#[rstest]
fn show_name_status_restricted_to_path(
    #[from(crate::common::command::init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    commit_file(dir, "a/b/3.txt", "three!", "Change a/b/3.txt", "2023-01-01 13:00:00 +0000");

    let output = run_revwalk_command(dir, &["log", "--name-status", "a/b"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let commits = stdout.split("\n\ncommit ").collect::<Vec<_>>();

    assert_eq!(commits.len(), 2);
    assert!(commits[0].ends_with("    Change a/b/3.txt\n\nM\ta/b/3.txt"));
    assert!(commits[1].ends_with("    Initial commit\n\nA\ta/b/3.txt\n"));

    Ok(())
}
