use crate::common::command::run_revwalk_command;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_linear_history_in_medium_format(
    #[from(crate::common::command::linear_history_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_revwalk_command(repository_dir.path(), &["log"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let commits = stdout.split("\n\ncommit ").collect::<Vec<_>>();
    assert_eq!(commits.len(), 3);

    let messages = ["Third commit", "Second commit", "First commit"];
    let hours = ["12", "11", "10"];
    for ((commit, message), hour) in commits.iter().zip(messages).zip(hours) {
        let lines = commit.lines().collect::<Vec<_>>();
        let header = lines[0].trim_start_matches("commit ");

        assert_eq!(header.len(), 40);
        assert!(header.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(lines[1], "Author: fake_user <fake_email@email.com>");
        assert_eq!(lines[2], format!("Date:   Sun Jan 1 {hour}:00:00 2023 +0000"));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], format!("    {message}"));
    }

    Ok(())
}

#[rstest]
fn show_abbreviated_ids_in_medium_format(
    #[from(crate::common::command::linear_history_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_revwalk_command(repository_dir.path(), &["log", "--abbrev-commit"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let ids = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .collect::<Vec<_>>();

    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| id.len() == 7));

    Ok(())
}
