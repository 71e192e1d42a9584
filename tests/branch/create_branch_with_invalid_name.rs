use crate::common::command::run_revwalk_command;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
#[case::starts_with_dot(".branch")]
#[case::ends_with_lock("branch.lock")]
#[case::consecutive_dots("feature..branch")]
#[case::slash_dot("feature/.branch")]
#[case::ends_with_slash("branch/")]
#[case::at_brace("feature@{0}")]
#[case::asterisk("feature*branch")]
#[case::colon("feature:branch")]
#[case::question_mark("feature?branch")]
#[case::open_bracket("feature[branch")]
#[case::caret("feature^branch")]
#[case::tilde("feature~branch")]
#[case::space("feature branch")]
fn create_branch_with_invalid_name(
    #[from(crate::common::command::init_repository_dir)] repository_dir: TempDir,
    #[case] branch_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_revwalk_command(repository_dir.path(), &["branch", "create", branch_name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid branch name"));

    let heads = std::fs::read_dir(repository_dir.path().join(".git/refs/heads"))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    assert_eq!(heads, vec!["master".to_string()]);

    Ok(())
}
