use crate::common::command::{commit_file, log_subjects, run_revwalk_command, switch_head};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::exclude_topic(&["master", "^topic"], &["M3"])]
#[case::exclusion_first(&["^topic", "master"], &["M3"])]
#[case::exclude_master(&["^master", "topic"], &["T4", "T3", "T2", "T1"])]
#[case::only_exclusions(&["^topic~2"], &[])]
#[case::multiple_exclusions(&["topic", "^master", "^topic~2"], &["T4", "T3"])]
#[case::exclude_everything(&["topic", "^topic", "^master"], &[])]
fn log_excluded_revisions(
    #[from(crate::common::command::branched_history_dir)] repository_dir: TempDir,
    #[case] revisions: &[&str],
    #[case] expected: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let subjects = log_subjects(repository_dir.path(), revisions)?;

    assert_eq!(subjects, expected);

    Ok(())
}

/// A side branch forked from topic far in the past still hides its history
/// from topic, even though master's newer commits are walked first.
#[rstest]
fn log_excluded_long_side_branch(
    #[from(crate::common::command::branched_history_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_revwalk_command(dir, &["branch", "create", "side", "topic~2"])
        .assert()
        .success();
    switch_head(dir, "side");
    commit_file(dir, "side.txt", "side", "S1", "2023-01-02 09:00:00 +0000");
    switch_head(dir, "master");

    let subjects = log_subjects(dir, &["side..topic", "^master"])?;

    assert_eq!(subjects, vec!["T4", "T3"]);

    Ok(())
}
