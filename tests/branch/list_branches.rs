use crate::common::command::{run_revwalk_command, switch_head};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_branches_with_default_branch_only(
    #[from(crate::common::command::init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_revwalk_command(repository_dir.path(), &["branch", "list"])
        .assert()
        .success()
        .stdout("* master\n");

    Ok(())
}

#[rstest]
fn list_branches_marks_the_current_one(
    #[from(crate::common::command::init_repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    for branch in ["topic", "feature/login", "alpha"] {
        run_revwalk_command(repository_dir.path(), &["branch", "create", branch])
            .assert()
            .success();
    }
    switch_head(repository_dir.path(), "topic");

    run_revwalk_command(repository_dir.path(), &["branch", "list"])
        .assert()
        .success()
        .stdout("  alpha\n  feature/login\n  master\n* topic\n");

    Ok(())
}
